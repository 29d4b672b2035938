use maud::{html, Markup, DOCTYPE};

fn head(title: &str) -> Markup {
    html! {
        head {
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            title { (title) " | NYC Rentals" }
            link rel="stylesheet" href="/static/main.css";
            script src="https://unpkg.com/htmx.org@1.9.12" defer {}
        }
    }
}

/// Public site chrome.
pub fn desktop_layout(title: &str, is_admin: bool, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            (head(title))
            body {
                header class="site-header" {
                    a href="/" class="brand" { "NYC Rentals" }
                    nav {
                        ul {
                            li { a href="/" { "Home" } }
                            li { a href="/listings" { "Listings" } }
                            li { a href="/contact" { "Contact" } }
                            @if is_admin {
                                li { a href="/admin/dashboard" { "Admin" } }
                            }
                        }
                    }
                }
                (content)
                footer class="site-footer" {
                    p { "© NYC Rentals. All rights reserved." }
                }
            }
        }
    }
}

/// Admin chrome: brand, "View Site" and the sign-out button.
pub fn admin_layout(title: &str, email: Option<&str>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            (head(title))
            body class="admin" {
                header class="admin-header" {
                    a href="/admin/dashboard" class="brand" {
                        "NYC Rentals " span class="badge badge-indigo" { "Admin" }
                    }
                    div class="admin-actions" {
                        @if let Some(email) = email {
                            span class="muted" { (email) }
                        }
                        a href="/" target="_blank" { "View Site" }
                        form method="post" action="/auth/sign-out" class="inline" {
                            button type="submit" class="btn btn-light" { "Sign out" }
                        }
                    }
                }
                (content)
            }
        }
    }
}
