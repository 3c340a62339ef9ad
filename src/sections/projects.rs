use crate::config::ProjectsConfig;
use maud::{Markup, html};

pub fn render(projects: &ProjectsConfig) -> Markup {
    html! {
        div.projects-section #projects {
            div.container {
                h3.section-title { (projects.title) }
                div.projects-grid {
                    @for project in &projects.items {
                        article.project-card {
                            img.project-image src=(project.image_url) alt=(project.title)
                                loading="lazy" decoding="async";
                            div.project-content {
                                h4.project-title { (project.title) }
                                p.project-description { (project.description) }
                            }
                        }
                    }
                }
            }
        }
    }
}
