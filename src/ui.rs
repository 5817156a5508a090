use crate::config::{FooterColumn, NavLink, SiteConfig};
use crate::models::VisitSnapshot;
use chrono::{Datelike, Utc};

pub fn render_home(config: &SiteConfig, snapshot: VisitSnapshot) -> String {
    let body = HOME_HTML
        .replace("{{SITE_TITLE}}", &config.title)
        .replace("{{TAGLINE}}", &config.tagline)
        .replace("{{FEATURES}}", &feature_cards());
    render_page(config, &config.title, &body, snapshot)
}

pub fn render_blog_archive(config: &SiteConfig, snapshot: VisitSnapshot) -> String {
    let body = BLOG_ARCHIVE_HTML
        .replace("{{SITE_TITLE}}", &config.title)
        .replace("{{REPO_URL}}", &config.repo_url);
    render_page(config, "Blog", &body, snapshot)
}

fn render_page(
    config: &SiteConfig,
    title: &str,
    content: &str,
    snapshot: VisitSnapshot,
) -> String {
    PAGE_HTML
        .replace("{{TITLE}}", title)
        .replace("{{SITE_TITLE}}", &config.title)
        .replace("{{NAV_LINKS}}", &nav_links(&config.navbar))
        .replace("{{CONTENT}}", content)
        .replace("{{FOOTER_COLUMNS}}", &footer_columns(&config.footer))
        .replace("{{COPYRIGHT}}", &copyright_line(config))
        .replace("{{PAGE_VIEWS}}", &snapshot.page_views.to_string())
        .replace("{{TOTAL_VIEWS}}", &snapshot.total_views.to_string())
}

fn nav_links(links: &[NavLink]) -> String {
    links
        .iter()
        .map(|link| format!(r#"<a href="{}">{}</a>"#, link.href, link.label))
        .collect()
}

fn footer_columns(columns: &[FooterColumn]) -> String {
    columns
        .iter()
        .map(|column| {
            let items: String = column
                .links
                .iter()
                .map(|link| format!(r#"<li><a href="{}">{}</a></li>"#, link.href, link.label))
                .collect();
            format!(
                r#"<div class="footer-col"><h4>{}</h4><ul>{items}</ul></div>"#,
                column.title
            )
        })
        .collect()
}

fn copyright_line(config: &SiteConfig) -> String {
    format!(
        "Copyright © {} {}.",
        Utc::now().year(),
        config.copyright_owner
    )
}

const FEATURES: &[(&str, &str)] = &[
    (
        "Field Notes",
        "Short reads on where large models are heading and what actually ships.",
    ),
    (
        "Hands-on Guides",
        "Step-by-step walkthroughs, from running a model locally to wiring it into a product.",
    ),
    (
        "Community Picks",
        "Open-source projects, papers, and discussions worth your weekend.",
    ),
];

fn feature_cards() -> String {
    FEATURES
        .iter()
        .map(|(title, blurb)| {
            format!(r#"<div class="card"><h3>{title}</h3><p>{blurb}</p></div>"#)
        })
        .collect()
}


const PAGE_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{TITLE}} | {{SITE_TITLE}}</title>
  <style>
    :root {
      --ink: #1c1e21;
      --muted: #606770;
      --accent: #2e8555;
      --footer-bg: #242526;
      --footer-ink: #ebedf0;
      --card-border: rgba(0, 0, 0, 0.1);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      display: flex;
      flex-direction: column;
      color: var(--ink);
      font-family: system-ui, -apple-system, "Segoe UI", sans-serif;
      line-height: 1.6;
    }

    .navbar {
      display: flex;
      align-items: center;
      justify-content: space-between;
      padding: 12px 24px;
      box-shadow: 0 1px 2px var(--card-border);
    }

    .navbar .brand {
      font-weight: 700;
      font-size: 1.1rem;
      color: var(--ink);
      text-decoration: none;
    }

    .navbar nav a {
      margin-left: 18px;
      color: var(--ink);
      text-decoration: none;
    }

    .navbar nav a:hover {
      color: var(--accent);
    }

    main {
      flex: 1;
      width: min(960px, 100%);
      margin: 0 auto;
      padding: 32px 24px 56px;
    }

    .hero {
      text-align: center;
      padding: 40px 0 24px;
    }

    .hero h1 {
      margin: 0 0 8px;
      font-size: clamp(2rem, 4vw, 2.8rem);
    }

    .hero p {
      margin: 0;
      color: var(--muted);
      font-size: 1.15rem;
    }

    .cards {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
      gap: 20px;
      margin-top: 32px;
    }

    .card {
      border: 1px solid var(--card-border);
      border-radius: 10px;
      padding: 20px;
    }

    .card h3 {
      margin-top: 0;
    }

    a {
      color: var(--accent);
    }

    .button {
      display: inline-block;
      margin-top: 16px;
      padding: 10px 20px;
      border-radius: 8px;
      background: var(--accent);
      color: white;
      text-decoration: none;
      font-weight: 600;
    }

    footer {
      background: var(--footer-bg);
      color: var(--footer-ink);
      padding: 32px 24px 20px;
    }

    .footer-cols {
      display: flex;
      flex-wrap: wrap;
      gap: 48px;
      width: min(960px, 100%);
      margin: 0 auto;
    }

    .footer-col h4 {
      margin: 0 0 8px;
    }

    .footer-col ul {
      list-style: none;
      margin: 0;
      padding: 0;
    }

    .footer-col a {
      color: var(--footer-ink);
      text-decoration: none;
    }

    .footer-col a:hover {
      text-decoration: underline;
    }

    .footer-meta {
      width: min(960px, 100%);
      margin: 24px auto 0;
      text-align: center;
      font-size: 0.9rem;
      color: #a9adb3;
    }

    .visit-stats {
      margin-top: 8px;
    }

    .visit-stats .count {
      font-weight: 600;
      color: var(--footer-ink);
    }

    .visit-stats .separator {
      margin: 0 10px;
    }
  </style>
</head>
<body>
  <header class="navbar">
    <a class="brand" href="/">{{SITE_TITLE}}</a>
    <nav>{{NAV_LINKS}}</nav>
  </header>

  <main>
{{CONTENT}}
  </main>

  <footer>
    <div class="footer-cols">{{FOOTER_COLUMNS}}</div>
    <div class="footer-meta">
      <div>{{COPYRIGHT}}</div>
      <div class="visit-stats">
        <span>Views today</span>
        <span class="count">{{PAGE_VIEWS}}</span>
        <span class="separator">|</span>
        <span>All-time views</span>
        <span class="count">{{TOTAL_VIEWS}}</span>
      </div>
    </div>
  </footer>
</body>
</html>
"#;

const HOME_HTML: &str = r#"    <section class="hero">
      <h1>{{SITE_TITLE}}</h1>
      <p>{{TAGLINE}}</p>
      <a class="button" href="/blog-archive">Read the blog →</a>
    </section>

    <section class="cards">{{FEATURES}}</section>
"#;

const BLOG_ARCHIVE_HTML: &str = r#"    <h1>Welcome to the {{SITE_TITLE}} blog</h1>
    <p>This is where we write things down. Expect regular posts on:</p>

    <h2>🚀 What we cover</h2>
    <ul>
      <li>Where AI research and tooling are heading</li>
      <li>Practical large-model tutorials</li>
      <li>Open-source projects we use and like</li>
      <li>News from the community</li>
    </ul>

    <h2>📚 Featured posts</h2>
    <ul>
      <li><a href="{{REPO_URL}}/blob/main/blog/local-model-deploy.md">A beginner-friendly guide to running large models locally</a></li>
      <li><a href="{{REPO_URL}}/tree/main/blog">More posts…</a></li>
    </ul>

    <h2>💡 Contributing</h2>
    <p>Posts from community members are welcome. To submit one:</p>
    <ol>
      <li>Open a pull request on GitHub</li>
      <li>Send a draft by email</li>
      <li>Start a thread in the discussions board</li>
    </ol>

    <a class="button" href="{{REPO_URL}}/tree/main/blog">Browse all posts →</a>
"#;
