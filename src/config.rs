use std::env;

const DEFAULT_TITLE: &str = "Mind Workshop";
const DEFAULT_TAGLINE: &str = "Sharing what's next in applied AI.";
const DEFAULT_REPO_URL: &str = "https://github.com/mind-workshop/site";

#[derive(Debug, Clone)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone)]
pub struct FooterColumn {
    pub title: String,
    pub links: Vec<NavLink>,
}

#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub title: String,
    pub tagline: String,
    pub repo_url: String,
    pub navbar: Vec<NavLink>,
    pub footer: Vec<FooterColumn>,
    pub copyright_owner: String,
}

impl SiteConfig {
    pub fn from_env() -> Self {
        Self::new(
            env::var("SITE_TITLE").unwrap_or_else(|_| DEFAULT_TITLE.to_string()),
            env::var("SITE_TAGLINE").unwrap_or_else(|_| DEFAULT_TAGLINE.to_string()),
            env::var("SITE_REPO_URL").unwrap_or_else(|_| DEFAULT_REPO_URL.to_string()),
        )
    }

    pub fn new(title: String, tagline: String, repo_url: String) -> Self {
        let navbar = vec![
            link("Home", "/"),
            link("Blog", "/blog-archive"),
            link("GitHub", &repo_url),
        ];
        let footer = vec![
            FooterColumn {
                title: "Content".to_string(),
                links: vec![link("Blog", "/blog-archive")],
            },
            FooterColumn {
                title: "More".to_string(),
                links: vec![link("GitHub", &repo_url)],
            },
        ];

        Self {
            copyright_owner: title.clone(),
            title,
            tagline,
            repo_url,
            navbar,
            footer,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_TITLE.to_string(),
            DEFAULT_TAGLINE.to_string(),
            DEFAULT_REPO_URL.to_string(),
        )
    }
}

fn link(label: &str, href: &str) -> NavLink {
    NavLink {
        label: label.to_string(),
        href: href.to_string(),
    }
}
