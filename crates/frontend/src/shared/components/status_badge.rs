use leptos::prelude::*;

/// Colour family of a status pill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Info,
    Success,
    Warning,
    Error,
}

impl Tone {
    fn class(&self) -> &'static str {
        match self {
            Tone::Neutral => "badge badge--neutral",
            Tone::Info => "badge badge--primary",
            Tone::Success => "badge badge--success",
            Tone::Warning => "badge badge--warning",
            Tone::Error => "badge badge--error",
        }
    }

    /// Tone for the status strings used across the API.
    pub fn for_status(status: &str) -> Self {
        match status {
            "approved" | "completed" | "delivered" | "paid" | "active" => Tone::Success,
            "pending" | "requested" | "processing" | "in-process" => Tone::Warning,
            "rejected" | "suspended" | "cancelled" | "refunded" | "failed" => Tone::Error,
            "shipped" | "confirmed" => Tone::Info,
            _ => Tone::Neutral,
        }
    }
}

#[component]
pub fn StatusBadge(
    /// Raw status value, e.g. `"approved"`
    #[prop(into)]
    status: String,
    /// Text shown; defaults to the raw status
    #[prop(optional, into)]
    label: Option<String>,
) -> impl IntoView {
    let tone = Tone::for_status(&status);
    let text = label.unwrap_or(status);
    view! { <span class=tone.class()>{text}</span> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_for_status() {
        assert_eq!(Tone::for_status("approved"), Tone::Success);
        assert_eq!(Tone::for_status("in-process"), Tone::Warning);
        assert_eq!(Tone::for_status("suspended"), Tone::Error);
        assert_eq!(Tone::for_status("whatever"), Tone::Neutral);
    }
}
