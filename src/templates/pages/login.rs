// templates/pages/login.rs

use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn login_page(email: &str, error: Option<&str>) -> Markup {
    desktop_layout(
        "Admin Sign In",
        false,
        html! {
            section class="narrow auth" {
                h1 { "Admin Sign In" }
                @if let Some(error) = error {
                    div class="notice notice-error" { p { (error) } }
                }
                form method="post" action="/auth/sign-in" {
                    div class="field" {
                        label for="email" { "Email" }
                        input type="email" id="email" name="email" value=(email) required autocomplete="email";
                    }
                    div class="field" {
                        label for="password" { "Password" }
                        input type="password" id="password" name="password" required autocomplete="current-password";
                    }
                    button type="submit" class="btn" { "Sign in" }
                }
            }
        },
    )
}

pub fn auth_error_page(message: &str) -> Markup {
    desktop_layout(
        "Authentication Error",
        false,
        html! {
            section class="narrow auth" {
                h1 { "Authentication Error" }
                p { (message) }
                a href="/admin/login" class="btn" { "Back to Sign In" }
            }
        },
    )
}
