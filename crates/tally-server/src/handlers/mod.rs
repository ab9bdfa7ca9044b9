//! Counter endpoints.
//!
//! Each request is one read/mutate/render cycle against the shared counter.
//! Malformed input never surfaces to the client: a missing or unparsable
//! `amount` falls back to 1, and a failed render yields an empty body.

use axum::extract::{Form, State};
use axum::response::Html;
use serde::Deserialize;

use crate::app_state::AppState;
use crate::view::{FRAGMENT_TEMPLATE, PAGE_TEMPLATE};

/// Mutation form body. `amount` stays a string so an unparsable value
/// degrades to the default instead of a 422 rejection.
#[derive(Debug, Deserialize)]
pub struct AmountForm {
    #[serde(default)]
    amount: Option<String>,
}

fn parse_amount(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(1)
}

fn amount_of(form: &Option<Form<AmountForm>>) -> i64 {
    parse_amount(form.as_ref().and_then(|f| f.amount.as_deref()))
}

/// GET `/` — full page with the current value.
pub async fn index(State(app): State<AppState>) -> Html<String> {
    let value = app.counter().get_value();
    render_or_empty(&app, PAGE_TEMPLATE, value)
}

/// POST `/increase` — add `amount` (default 1), respond with the fragment.
pub async fn increase(
    State(app): State<AppState>,
    form: Option<Form<AmountForm>>,
) -> Html<String> {
    let value = app.counter().increase(amount_of(&form));
    app.metrics().counter_ops.inc(&[("op", "increase")]);
    render_or_empty(&app, FRAGMENT_TEMPLATE, value)
}

/// POST `/decrease` — subtract `amount` (default 1), respond with the fragment.
pub async fn decrease(
    State(app): State<AppState>,
    form: Option<Form<AmountForm>>,
) -> Html<String> {
    let value = app.counter().decrease(amount_of(&form));
    app.metrics().counter_ops.inc(&[("op", "decrease")]);
    render_or_empty(&app, FRAGMENT_TEMPLATE, value)
}

fn render_or_empty(app: &AppState, template: &str, value: i64) -> Html<String> {
    match app.views().render(template, value) {
        Ok(body) => Html(body),
        Err(e) => {
            tracing::warn!(%template, error = %e, "render failed");
            app.metrics().render_failures.inc(&[("template", template)]);
            Html(String::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::parse_amount;

    #[test]
    fn missing_amount_defaults_to_one() {
        assert_eq!(parse_amount(None), 1);
    }

    #[test]
    fn unparsable_amount_defaults_to_one() {
        assert_eq!(parse_amount(Some("three")), 1);
        assert_eq!(parse_amount(Some("")), 1);
        assert_eq!(parse_amount(Some("1.5")), 1);
    }

    #[test]
    fn valid_amounts_parse() {
        assert_eq!(parse_amount(Some("3")), 3);
        assert_eq!(parse_amount(Some(" 42 ")), 42);
        assert_eq!(parse_amount(Some("-2")), -2);
    }
}
