use crate::errors::SiteError;
use crate::escape::css_value;
use crate::models::{BusinessProfile, ColorTheme};
use crate::session::{session_key, Credentials};
use crate::stats::{NO_BOOKINGS_HTML, REFRESH_INTERVAL_MS};
use askama::Template;

pub const PUBLIC_PAGE: &str = "index.html";
pub const ADMIN_PAGE: &str = "admin.html";

const SERVICE_ICONS: [&str; 5] = ["⭐", "🎯", "💎", "🚀", "🌟"];

struct ServiceCard<'a> {
    icon: &'static str,
    name: &'a str,
    lower: String,
}

/// Public booking page. Text and attribute values are escaped by askama;
/// script constants go through the `json` filter.
#[derive(Template)]
#[template(path = "public_site.html")]
struct PublicSiteTemplate<'a> {
    title: String,
    description: String,
    meta_keywords: String,
    primary: String,
    secondary: String,
    accent: String,
    name: &'a str,
    tagline: String,
    keywords: Vec<&'a str>,
    service_cards: Vec<ServiceCard<'a>>,
    services: &'a [String],
    phone: &'a str,
    phone_href: String,
    email: &'a str,
    email_href: String,
    address: &'a str,
    admin_href: &'static str,
    storage_key: String,
}

#[derive(Template)]
#[template(path = "admin_dashboard.html")]
struct AdminDashboardTemplate<'a> {
    title: String,
    primary: String,
    secondary: String,
    accent: String,
    name: &'a str,
    username: &'a str,
    password: &'a str,
    site_href: &'static str,
    no_bookings: &'static str,
    refresh_ms: u32,
    storage_key: String,
    session_key: String,
}

pub fn render_public_site(
    profile: &BusinessProfile,
    theme: &ColorTheme,
) -> Result<String, SiteError> {
    let keywords = keywords(profile);
    let joined = keywords.join(", ");
    let title = if joined.is_empty() {
        profile.name.clone()
    } else {
        format!("{} - {joined}", profile.name)
    };
    let description = if joined.is_empty() {
        format!("{} - {}", profile.name, tagline(profile))
    } else {
        format!("{} provides {joined} services.", profile.name)
    };

    let page = PublicSiteTemplate {
        title,
        description,
        meta_keywords: joined,
        primary: css_value(&theme.primary),
        secondary: css_value(&theme.secondary),
        accent: css_value(&theme.accent),
        name: &profile.name,
        tagline: tagline(profile),
        keywords,
        service_cards: service_cards(&profile.services),
        services: &profile.services,
        phone: &profile.phone,
        phone_href: format!("tel:{}", profile.phone.trim()),
        email: &profile.email,
        email_href: format!("mailto:{}", profile.email.trim()),
        address: &profile.address,
        admin_href: ADMIN_PAGE,
        storage_key: profile.storage_key(),
    };
    Ok(page.render()?)
}

pub fn render_admin_dashboard(
    profile: &BusinessProfile,
    theme: &ColorTheme,
) -> Result<String, SiteError> {
    render_admin_dashboard_with(profile, theme, &Credentials::default())
}

pub fn render_admin_dashboard_with(
    profile: &BusinessProfile,
    theme: &ColorTheme,
    credentials: &Credentials,
) -> Result<String, SiteError> {
    let page = AdminDashboardTemplate {
        title: format!("{} - Admin Dashboard", profile.name),
        primary: css_value(&theme.primary),
        secondary: css_value(&theme.secondary),
        accent: css_value(&theme.accent),
        name: &profile.name,
        username: &credentials.username,
        password: &credentials.password,
        site_href: PUBLIC_PAGE,
        no_bookings: NO_BOOKINGS_HTML,
        refresh_ms: REFRESH_INTERVAL_MS,
        storage_key: profile.storage_key(),
        session_key: session_key(profile),
    };
    Ok(page.render()?)
}

fn keywords(profile: &BusinessProfile) -> Vec<&str> {
    profile
        .keywords
        .iter()
        .map(|keyword| keyword.trim())
        .filter(|keyword| !keyword.is_empty())
        .collect()
}

fn tagline(profile: &BusinessProfile) -> String {
    match profile.category.trim() {
        "" => "Professional Services".to_string(),
        category => format!("Premium {category} Services"),
    }
}

fn service_cards(services: &[String]) -> Vec<ServiceCard<'_>> {
    services
        .iter()
        .enumerate()
        .map(|(index, service)| ServiceCard {
            icon: SERVICE_ICONS[index % SERVICE_ICONS.len()],
            name: service,
            lower: service.to_lowercase(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme;

    fn profile() -> BusinessProfile {
        BusinessProfile {
            name: "Happy Cafe".to_string(),
            category: "Cafe".to_string(),
            keywords: vec!["coffee".to_string(), "dessert".to_string(), "brunch".to_string()],
            phone: "02-123-4567".to_string(),
            email: "hello@happycafe.kr".to_string(),
            address: "Seoul, Mapo-gu".to_string(),
            services: vec!["Coffee".to_string(), "Dessert".to_string()],
            storage_key: None,
        }
    }

    fn hostile() -> BusinessProfile {
        BusinessProfile {
            name: r#"Evil</script><script>alert("x")</script>"#.to_string(),
            category: "cafe".to_string(),
            keywords: vec![r#"" onload="alert(1)"#.to_string()],
            phone: "'; alert(1); '".to_string(),
            email: r#"a@b.c" onclick="alert(1)"#.to_string(),
            address: "<img src=x onerror=alert(1)>".to_string(),
            services: vec![r#"x"><script>alert(1)</script>"#.to_string()],
            storage_key: None,
        }
    }

    #[test]
    fn rendering_is_deterministic() {
        let p = profile();
        let t = theme::resolve(&p.category);
        assert_eq!(render_public_site(&p, &t).unwrap(), render_public_site(&p, &t).unwrap());
        assert_eq!(
            render_admin_dashboard(&p, &t).unwrap(),
            render_admin_dashboard(&p, &t).unwrap()
        );
    }

    #[test]
    fn public_sections_appear_in_order() {
        let p = profile();
        let html = render_public_site(&p, &theme::resolve(&p.category)).unwrap();
        let positions: Vec<usize> = [
            r#"id="home""#,
            r#"id="services""#,
            r#"id="booking""#,
            r#"id="contact""#,
            r#"class="admin-link""#,
        ]
        .iter()
        .map(|marker| html.find(marker).unwrap_or_else(|| panic!("missing {marker}")))
        .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));

        assert!(html.contains("<title>Happy Cafe - coffee, dessert, brunch</title>"));
        assert!(html.contains("coffee • dessert • brunch"));
        assert!(html.contains("Premium Cafe Services"));
        assert!(html.contains(r#"<option value="Coffee">Coffee</option>"#));
        assert!(html.contains(r#"href="admin.html""#));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn service_icons_cycle() {
        let mut p = profile();
        p.services = (1..=7).map(|i| format!("Service {i}")).collect();
        let html = render_public_site(&p, &theme::default_theme()).unwrap();
        assert_eq!(html.matches("class=\"service-card\"").count(), 7);
        assert_eq!(html.matches("⭐").count(), 2);
        assert_eq!(html.matches("🎯").count(), 2);
        assert_eq!(html.matches("🌟").count(), 1);
    }

    #[test]
    fn empty_keywords_and_services_render() {
        let mut p = profile();
        p.keywords.clear();
        p.services.clear();
        p.category.clear();
        let html = render_public_site(&p, &theme::default_theme()).unwrap();

        assert!(html.contains("<title>Happy Cafe</title>"));
        assert!(html.contains(r#"<div class="keywords"></div>"#));
        assert!(!html.contains("service-card\""));
        assert!(html.contains(r#"<option value="">Select a service</option>"#));
        assert!(html.contains("Professional Services"));
    }

    #[test]
    fn both_documents_share_key_business_and_theme() {
        let p = profile();
        let t = theme::resolve(&p.category);
        let public = render_public_site(&p, &t).unwrap();
        let admin = render_admin_dashboard(&p, &t).unwrap();

        for html in [&public, &admin] {
            assert!(html.contains(r#"const STORAGE_KEY = "happy-cafe_bookings";"#));
            assert!(html.contains(r#"const BUSINESS = "Happy Cafe";"#));
            assert!(html.contains(&format!("--primary: {};", t.primary)));
            assert!(html.contains(&format!("--secondary: {};", t.secondary)));
            assert!(html.contains(&format!("--accent: {};", t.accent)));
        }
        assert!(admin.contains(r#"const SESSION_KEY = "happy-cafe_admin_session";"#));
    }

    #[test]
    fn hostile_profile_is_escaped_everywhere() {
        let p = hostile();
        let t = theme::resolve(&p.category);
        let public = render_public_site(&p, &t).unwrap();
        let admin = render_admin_dashboard(&p, &t).unwrap();

        for html in [&public, &admin] {
            assert_eq!(html.matches("<script>").count(), 1, "only the document's own script");
            assert_eq!(html.matches("</script>").count(), 1);
            assert!(!html.contains("<img"));
        }
        assert!(public.contains(
            r#"const BUSINESS = "Evil\u003c/script\u003e\u003cscript\u003ealert(\"x\")\u003c/script\u003e";"#
        ));
        assert!(!public.contains(r#"" onload=""#));
        assert!(!public.contains(r#"" onclick=""#));
        assert!(public.contains("&lt;img src=x onerror=alert(1)&gt;"));
        assert!(!public.contains(r#"<option value="x">"#));
        assert!(public.contains("&gt;&lt;script&gt;alert(1)&lt;/script&gt;\">"));
    }

    #[test]
    fn template_syntax_inside_values_is_literal() {
        let mut p = profile();
        p.name = "{{ phone }}{% if true %}".to_string();
        let html = render_public_site(&p, &theme::default_theme()).unwrap();
        assert!(html.contains("<h1>{{ phone }}{% if true %}</h1>"));
        assert!(html.contains(r#"const BUSINESS = "{{ phone }}{% if true %}";"#));
    }

    #[test]
    fn hostile_theme_cannot_escape_style() {
        let t = ColorTheme::new("red;}</style><script>alert(1)</script>", "#fff", "#000");
        let html = render_public_site(&profile(), &t).unwrap();
        assert_eq!(html.matches("</style>").count(), 1);
        assert_eq!(html.matches("<script>").count(), 1);
    }

    #[test]
    fn admin_embeds_credentials_and_placeholder() {
        let p = profile();
        let credentials = Credentials {
            username: "owner".to_string(),
            password: "pa\"ss".to_string(),
        };
        let html = render_admin_dashboard_with(&p, &theme::default_theme(), &credentials).unwrap();

        assert!(html.contains(r#"const CREDENTIALS = { username: "owner", password: "pa\"ss" };"#));
        assert!(html.contains("Username: owner / Password: pa&"));
        assert!(!html.contains("Password: pa\"ss"));
        assert!(html.contains(NO_BOOKINGS_HTML));
        assert!(html.contains(&format!("const REFRESH_MS = {REFRESH_INTERVAL_MS};")));
        assert!(html.contains("<title>Happy Cafe - Admin Dashboard</title>"));
    }
}
