//! Page handlers: the form and its submission.

use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use zeroize::Zeroizing;

use crate::api::render::PageView;
use crate::api::state::AppState;
use crate::domain::{ClassSelection, GenerateForm};
use crate::error::Result;

/// Render the empty form with every class checked.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let generator = &state.generator;
    let view = PageView::new(generator.default_length(), ClassSelection::all());

    Html(view.render())
}

/// Generate a password from the submitted form and re-render the page.
///
/// The body is taken as raw pairs so repeated keys never reject the request.
pub async fn generate(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Response {
    let generator = &state.generator;
    let form: GenerateForm = pairs.into_iter().collect();

    let requested = form.length(generator.default_length());
    let view = PageView::new(requested, form.selection());

    let outcome = generator
        .request_from(&form)
        .and_then(|request| generator.generate(&request));

    respond(view, generator.length_notice(requested), outcome)
}

/// Turn a generation outcome into the rendered page.
///
/// `notice` is shown only alongside a generated password.
fn respond(
    view: PageView,
    notice: Option<String>,
    outcome: Result<Zeroizing<String>>,
) -> Response {
    match outcome {
        Ok(password) => {
            let view = view.with_password(password).with_notice(notice);
            (StatusCode::OK, Html(view.render())).into_response()
        }
        Err(err) => {
            err.log();
            let status = err.status_code();
            (status, Html(view.with_error(err.user_message()).render())).into_response()
        }
    }
}
