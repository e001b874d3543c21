use crate::form::form_model::Field;
use crate::view::view_model::{BannerKind, SignUpView};

// ============================================================================
// Console renderer: the form as terminal text
// ============================================================================

/// Render the form for a terminal.
///
/// ```text
/// Email Address: wrong@gmail.com
/// Password:      *********
/// User Name:     Username
/// [ Sign Up ]
///
/// ✗ Error Signing Up!
/// ```
pub fn format_console_view(view: &SignUpView) -> String {
    let mut out = String::new();
    let width = view.fields.iter().map(|f| f.label.len()).max().unwrap_or(0) + 1;

    for f in &view.fields {
        let shown = if f.field == Field::Password {
            "*".repeat(f.value.chars().count())
        } else {
            f.value.clone()
        };
        out.push_str(&format!("{:<width$} {}\n", format!("{}:", f.label), shown, width = width));
        if let Some(error) = &f.error {
            out.push_str(&format!("{:<width$}   ! {}\n", "", error, width = width));
        }
    }

    if let Some(button) = &view.submit {
        if button.enabled {
            out.push_str(&format!("[ {} ]\n", button.label));
        } else {
            out.push_str(&format!("[ {} ] (disabled)\n", button.label));
        }
    }

    if let Some(banner) = &view.banner {
        let marker = match banner.kind {
            BannerKind::Success => "\u{2713}",
            BannerKind::Error => "\u{2717}",
        };
        out.push_str(&format!("\n{} {}\n", marker, banner.text));
    }

    if let Some(route) = &view.navigate_to {
        out.push_str(&format!("-> navigating to {}\n", route));
    }

    out
}
