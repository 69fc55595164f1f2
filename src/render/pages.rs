// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Full-page markup for the CMS web front.

use crate::cms::{CmsApp, Modal, Page};
use crate::render::html::escape;

const TITLE: &str = "Dunes Be One Basketball";

/// Page, modal and account toggles are driven by this one class.
const BASE_STYLE: &str = "<style>.hidden{display:none!important}</style>";

/// Render the whole document for the app's current state, including any
/// alerts the caller has drained.
pub fn render_page(app: &CmsApp, alerts: &[String]) -> String {
    let nav = nav_bar(app);
    let alert_html: String = alerts
        .iter()
        .map(|a| format!("<div class=\"alert\" role=\"alert\">{}</div>", escape(a)))
        .collect();

    let (home_class, dashboard_class) = match app.page() {
        Page::Home => ("page", "page hidden"),
        Page::Dashboard => ("page hidden", "page"),
    };

    let dashboard_content = if app.page() == Page::Dashboard {
        app.dashboard_html()
    } else {
        ""
    };

    format!(
        "<!DOCTYPE html>\
         <html lang=\"en\"><head><meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
         <title>{title}</title>{style}</head><body>\
         {nav}{alerts}\
         <main>\
         <section id=\"homePage\" class=\"{home_class}\">{home}</section>\
         <section id=\"dashboardPage\" class=\"{dashboard_class}\">\
         <div id=\"dashboardContent\">{dashboard}</div></section>\
         </main>\
         {modal}\
         </body></html>",
        title = TITLE,
        style = BASE_STYLE,
        nav = nav,
        alerts = alert_html,
        home_class = home_class,
        home = home_section(),
        dashboard_class = dashboard_class,
        dashboard = dashboard_content,
        modal = login_modal(app.login_modal()),
    )
}

fn nav_bar(app: &CmsApp) -> String {
    let active = |page: Page| {
        if app.page() == page {
            "nav-link active"
        } else {
            "nav-link"
        }
    };

    let account = match app.user_menu_label() {
        Some(label) => format!(
            "<a id=\"loginBtn\" class=\"btn hidden\" href=\"/?modal=login\">Login</a>\
             <div id=\"userMenu\"><span id=\"userName\">{}</span>\
             <form method=\"post\" action=\"/auth/logout\">\
             <button type=\"submit\" class=\"btn\">Logout</button></form></div>",
            escape(&label)
        ),
        None => "<a id=\"loginBtn\" class=\"btn\" href=\"/?modal=login\">Login</a>\
                 <div id=\"userMenu\" class=\"hidden\"></div>"
            .to_string(),
    };

    format!(
        "<nav class=\"navbar\"><span class=\"brand\">{}</span>\
         <a class=\"{}\" href=\"/\">Home</a>\
         <a class=\"{}\" href=\"/dashboard\">Dashboard</a>{}</nav>",
        TITLE,
        active(Page::Home),
        active(Page::Dashboard),
        account
    )
}

fn home_section() -> &'static str {
    "<div class=\"hero\"><h1>Welcome to Dunes Be One</h1>\
     <p>Athletes, coaches and managers: sign in to see your club dashboard.</p>\
     <a class=\"btn\" href=\"/dashboard\">Go to Dashboard</a></div>"
}

fn login_modal(state: Modal) -> String {
    let class = match state {
        Modal::Visible => "modal",
        Modal::Hidden => "modal hidden",
    };
    format!(
        "<div id=\"loginModal\" class=\"{}\"><div class=\"modal-content\">\
         <a class=\"close-btn\" href=\"/?modal=none\">&times;</a>\
         <h2>Login</h2>\
         <form id=\"loginForm\" method=\"post\" action=\"/auth/login\">\
         <input type=\"email\" id=\"email\" name=\"email\" placeholder=\"Email\" required>\
         <input type=\"password\" id=\"password\" name=\"password\" placeholder=\"Password\" required>\
         <button type=\"submit\" class=\"btn\">Login</button>\
         </form></div></div>",
        class
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ApiClient;
    use crate::storage::LocalStore;

    fn app() -> CmsApp {
        CmsApp::boot(
            ApiClient::new("http://localhost:5000/api/v1"),
            LocalStore::new_memory(),
        )
    }

    #[test]
    fn test_signed_out_page_shows_login_button() {
        let html = render_page(&app(), &[]);
        assert!(html.contains("<a id=\"loginBtn\" class=\"btn\""));
        assert!(html.contains("<div id=\"loginModal\" class=\"modal hidden\">"));
        assert!(html.contains("<section id=\"homePage\" class=\"page\">"));
        assert!(html.contains("<section id=\"dashboardPage\" class=\"page hidden\">"));
    }

    #[test]
    fn test_head_defines_hidden_class() {
        let html = render_page(&app(), &[]);
        let head_end = html.find("</head>").unwrap();
        assert!(html[..head_end].contains(BASE_STYLE));
    }

    #[test]
    fn test_open_modal_and_alerts() {
        let mut app = app();
        app.show_login();
        let html = render_page(&app, &["Tom & Jerry".to_string()]);
        assert!(html.contains("<div id=\"loginModal\" class=\"modal\">"));
        assert!(html.contains("<div class=\"alert\" role=\"alert\">Tom &amp; Jerry</div>"));
    }
}
