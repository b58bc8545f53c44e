use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::i18n::Locale;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub image: String,
    pub tags: Vec<String>,
    pub github: String,
    pub demo: String,
    pub homepage: Option<String>,
    pub stars: u32,
    pub forks: u32,
    pub updated: DateTime<Utc>,
}

impl Project {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Static projects shown when the GitHub listing cannot be fetched.
pub fn sample_projects(locale: Locale) -> Vec<Project> {
    let updated = Utc
        .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_else(Utc::now);

    let descriptions: [&str; 3] = match locale {
        Locale::English => [
            "Personal portfolio website built with React and Tailwind CSS",
            "E-commerce application with a shopping cart and checkout",
            "Task management app with drag and drop",
        ],
        Locale::Vietnamese => [
            "Website portfolio cá nhân được xây dựng với React và Tailwind CSS",
            "Ứng dụng thương mại điện tử với giỏ hàng và thanh toán",
            "Ứng dụng quản lý công việc với drag & drop",
        ],
    };

    let samples = [
        (
            1,
            "Portfolio",
            "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=500&h=300&fit=crop",
            ["React", "Tailwind", "Vite"],
        ),
        (
            2,
            "E-commerce App",
            "https://images.unsplash.com/photo-1557821552-17105176677c?w=500&h=300&fit=crop",
            ["React", "Redux", "API"],
        ),
        (
            3,
            "Task Manager",
            "https://images.unsplash.com/photo-1454165804606-c3d57bc86b40?w=500&h=300&fit=crop",
            ["React", "DnD", "LocalStorage"],
        ),
    ];

    samples
        .into_iter()
        .zip(descriptions)
        .map(|((id, title, image, tags), description)| Project {
            id,
            title: title.to_string(),
            description: description.to_string(),
            image: image.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            github: "https://github.com".to_string(),
            demo: "https://demo.com".to_string(),
            homepage: None,
            stars: 0,
            forks: 0,
            updated,
        })
        .collect()
}
