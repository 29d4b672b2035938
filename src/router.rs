use crate::auth::sessions::{
    cleared_session_cookie, create_session, load_session, revoke_session, session_cookie,
    session_token_from_cookie, AdminSession,
};
use crate::auth::{CallbackParams, ProviderSession};
use crate::db::drafts::{clear_draft_images, load_draft_images, save_draft_images};
use crate::domain::dashboard::DashboardTab;
use crate::domain::filter::ListingFilter;
use crate::errors::ServerError;
use crate::forms::{ContactForm, FieldErrors, FormFields, InquiryForm, ListingForm};
use crate::request::{header, multipart_files, read_body};
use crate::responses::{
    css_response, html_response, html_with_status, redirect, redirect_with_cookie, ResultResp,
};
use crate::state::AppState;
use crate::storage::{UploadError, UploadedImage};
use crate::templates::pages::{self, InquiryPanel, SettingsVm, UploaderVm};
use astra::Request;
use std::time::{SystemTime, UNIX_EPOCH};

const MAIN_CSS: &str = include_str!("../static/main.css");

/// Url-encoded forms are small; uploads get `AppState::body_limit`.
const FORM_BODY_LIMIT: u64 = 64 * 1024;

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let query = req.uri().query().map(str::to_string);

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    tracing::debug!(%method, %path, "request");

    match (method.as_str(), segments.as_slice()) {
        ("GET", []) => html_response(pages::home_page(&state.catalog, &state.proxy)),
        ("GET", ["static", "main.css"]) => css_response(MAIN_CSS),

        ("GET", ["listings"]) => listings(state, query.as_deref()),
        ("GET", ["listings", id]) => listing_detail(state, id, query.as_deref()),
        ("POST", ["listings", id, "inquiries"]) => submit_inquiry(req, state, id),

        ("GET", ["contact"]) => {
            html_response(pages::contact_page(&ContactForm::default(), &FieldErrors::default()))
        }
        ("POST", ["contact"]) => submit_contact(req, state),

        ("GET", ["admin", "login"]) => {
            if current_admin(&req, state)?.is_some() {
                return redirect("/admin/dashboard");
            }
            html_response(pages::login_page("", None))
        }
        ("POST", ["auth", "sign-in"]) => sign_in(req, state),
        ("GET", ["auth", "callback"]) => auth_callback(state, query.as_deref()),
        ("POST", ["auth", "sign-out"]) => sign_out(&req, state),

        (_, ["admin", rest @ ..]) => {
            let Some(admin) = current_admin(&req, state)? else {
                return redirect("/admin/login");
            };

            match (method.as_str(), rest) {
                ("GET", []) => redirect("/admin/dashboard"),
                ("GET", ["dashboard"]) => dashboard(state, &admin, query.as_deref()),
                ("GET", ["listings", "new"]) => new_listing(state, &admin),
                ("POST", ["listings"]) => create_listing(req, state, &admin),
                ("POST", ["listings", "images"]) => upload_images(req, state, &admin),
                ("POST", ["listings", "images", "delete"]) => remove_image(req, state, &admin),
                _ => Err(ServerError::NotFound),
            }
        }

        _ => Err(ServerError::NotFound),
    }
}

pub fn now_unix() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64
}

fn form_body(req: Request) -> Result<FormFields, ServerError> {
    Ok(FormFields::parse(&read_body(req, FORM_BODY_LIMIT)?))
}

fn is_htmx(req: &Request) -> bool {
    header(req, "HX-Request").is_some_and(|v| v == "true")
}

// ---------- public pages ----------

fn listings(state: &AppState, query: Option<&str>) -> ResultResp {
    let params = FormFields::from_query(query).to_map();
    let filter = ListingFilter::from_params(&params).map_err(|e| {
        ServerError::BadRequest(format!("invalid {} filter: {}", e.field, e.value))
    })?;

    let results = filter.apply(state.catalog.listings());
    tracing::debug!(?filter, found = results.len(), "listings filtered");

    html_response(pages::listings_page(&filter, &results, &state.proxy))
}

fn listing_detail(state: &AppState, id: &str, query: Option<&str>) -> ResultResp {
    let listing = state.catalog.find(id).ok_or(ServerError::NotFound)?;

    // Out-of-range or garbage indexes fall back to the cover.
    let selected = FormFields::from_query(query)
        .get("image")
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(0);

    let form = InquiryForm::for_listing(listing);
    html_response(pages::listing_detail_page(
        listing,
        selected,
        &state.proxy,
        InquiryPanel::Form {
            form: &form,
            errors: &FieldErrors::default(),
        },
    ))
}

fn submit_inquiry(req: Request, state: &AppState, id: &str) -> ResultResp {
    let listing = state.catalog.find(id).ok_or(ServerError::NotFound)?;
    let form = InquiryForm::from_fields(&form_body(req)?);

    if let Err(errors) = form.validate() {
        return html_with_status(
            422,
            pages::listing_detail_page(
                listing,
                0,
                &state.proxy,
                InquiryPanel::Form {
                    form: &form,
                    errors: &errors,
                },
            ),
        );
    }

    state
        .submissions
        .submit("inquiry", &(listing.id.as_str(), &form));
    html_response(pages::listing_detail_page(
        listing,
        0,
        &state.proxy,
        InquiryPanel::Submitted,
    ))
}

fn submit_contact(req: Request, state: &AppState) -> ResultResp {
    let form = ContactForm::from_fields(&form_body(req)?);

    if let Err(errors) = form.validate() {
        return html_with_status(422, pages::contact_page(&form, &errors));
    }

    state.submissions.submit("contact", &form);
    html_response(pages::contact_sent_page())
}

// ---------- auth ----------

fn current_admin(req: &Request, state: &AppState) -> Result<Option<AdminSession>, ServerError> {
    let Some(token) = header(req, "Cookie").and_then(session_token_from_cookie) else {
        return Ok(None);
    };
    let now = now_unix();
    state.db.with_conn(|conn| load_session(conn, token, now))
}

fn start_session(state: &AppState, provider: &ProviderSession, next: &str) -> ResultResp {
    let ttl = state.config.session_ttl_secs;
    let token = state
        .db
        .with_conn(|conn| create_session(conn, provider, now_unix(), ttl))?;

    tracing::info!(user_id = %provider.user.id, "admin signed in");
    redirect_with_cookie(next, &session_cookie(&token, ttl))
}

fn sign_in(req: Request, state: &AppState) -> ResultResp {
    let fields = form_body(req)?;
    let email = fields.text("email");
    let password = fields.get("password").unwrap_or_default().to_string();

    if email.is_empty() || password.is_empty() {
        return html_with_status(
            422,
            pages::login_page(&email, Some("Email and password are required")),
        );
    }

    let err = match state.identity.sign_in_with_password(&email, &password) {
        Ok(session) => return start_session(state, &session, "/admin/dashboard"),
        Err(e) => ServerError::from(e),
    };

    let message = match &err {
        ServerError::Unauthorized(message) => {
            tracing::info!(%email, %message, "sign-in rejected");
            message.as_str()
        }
        other => {
            tracing::error!(error = %other, "sign-in failed");
            "Unable to sign in right now. Please try again."
        }
    };
    html_with_status(err.status(), pages::login_page(&email, Some(message)))
}

fn auth_callback(state: &AppState, query: Option<&str>) -> ResultResp {
    let fields = FormFields::from_query(query);
    let params = CallbackParams {
        token_hash: fields.optional("token_hash"),
        kind: fields.optional("type"),
        error_description: fields.optional("error_description"),
    };

    match state.identity.exchange_session(&params) {
        Ok(session) => start_session(state, &session, "/"),
        Err(e) => {
            tracing::warn!(error = %e, "auth callback failed");
            let message = e.to_string();
            html_with_status(ServerError::from(e).status(), pages::auth_error_page(&message))
        }
    }
}

fn sign_out(req: &Request, state: &AppState) -> ResultResp {
    if let Some(admin) = current_admin(req, state)? {
        if let Err(e) = state.identity.sign_out(&admin.access_token) {
            tracing::warn!(error = %e, "provider sign-out failed");
        }
        state
            .db
            .with_conn(|conn| revoke_session(conn, admin.id, now_unix()))?;
    }

    redirect_with_cookie("/", &cleared_session_cookie())
}

// ---------- admin ----------

fn dashboard(state: &AppState, admin: &AdminSession, query: Option<&str>) -> ResultResp {
    let fields = FormFields::from_query(query);
    let tab = DashboardTab::parse(fields.get("tab"));

    let vm = SettingsVm {
        email: admin.email.as_deref(),
        bucket: state.images.bucket(),
        max_images: state.config.max_images,
    };
    html_response(pages::dashboard_page(&state.dashboard, tab, &vm))
}

fn load_draft(state: &AppState, admin: &AdminSession) -> Result<Vec<UploadedImage>, ServerError> {
    state
        .db
        .with_conn(|conn| load_draft_images(conn, &admin.user_id))
}

fn save_draft(state: &AppState, admin: &AdminSession, images: &[UploadedImage]) -> Result<(), ServerError> {
    state
        .db
        .with_conn(|conn| save_draft_images(conn, &admin.user_id, images))
}

fn new_listing(state: &AppState, admin: &AdminSession) -> ResultResp {
    let uploader = state.uploader(load_draft(state, admin)?);
    let vm = UploaderVm {
        uploader: &uploader,
        error: None,
        last_batch: None,
    };

    html_response(pages::new_listing_page(
        &ListingForm::default(),
        &FieldErrors::default(),
        &vm,
        &state.proxy,
        admin.email.as_deref(),
    ))
}

fn create_listing(req: Request, state: &AppState, admin: &AdminSession) -> ResultResp {
    let form = ListingForm::from_fields(&form_body(req)?);
    let uploader = state.uploader(load_draft(state, admin)?);

    if let Err(errors) = form.validate() {
        tracing::debug!(fields = ?errors.fields().collect::<Vec<_>>(), "listing form rejected");
        let vm = UploaderVm {
            uploader: &uploader,
            error: None,
            last_batch: None,
        };
        return html_with_status(
            422,
            pages::new_listing_page(
                &form,
                &errors,
                &vm,
                &state.proxy,
                admin.email.as_deref(),
            ),
        );
    }

    let images: Vec<&str> = uploader.images().iter().map(|i| i.url.as_str()).collect();
    state.submissions.submit("listing", &(&form, images));

    state
        .db
        .with_conn(|conn| clear_draft_images(conn, &admin.user_id))?;
    redirect("/admin/dashboard?tab=listings")
}

/// Uploader block alone for htmx, the whole page otherwise.
fn render_uploader(htmx: bool, state: &AppState, admin: &AdminSession, vm: &UploaderVm<'_>) -> ResultResp {
    if htmx {
        return html_response(pages::image_uploader(vm, &state.proxy));
    }
    html_response(pages::new_listing_page(
        &ListingForm::default(),
        &FieldErrors::default(),
        vm,
        &state.proxy,
        admin.email.as_deref(),
    ))
}

fn upload_images(req: Request, state: &AppState, admin: &AdminSession) -> ResultResp {
    let htmx = is_htmx(&req);
    let content_type = header(&req, "Content-Type").unwrap_or_default().to_string();
    let body = read_body(req, state.body_limit())?;
    let files = multipart_files(&content_type, body, "images")?;

    let mut uploader = state.uploader(load_draft(state, admin)?);

    let (error, last_batch) = match uploader.upload_batch(&state.images, &files) {
        Ok(report) => {
            if !report.is_complete() {
                tracing::warn!(uploaded = report.uploaded.len(), total = files.len(), "upload batch stopped early");
            }
            let batch = (!files.is_empty()).then_some((report.uploaded.len(), files.len()));
            (report.error, batch)
        }
        Err(e) => (Some(e), None),
    };

    // Partial batches are kept.
    save_draft(state, admin, uploader.images())?;

    let vm = UploaderVm {
        uploader: &uploader,
        error: error.as_ref().map(UploadError::to_string),
        last_batch,
    };
    render_uploader(htmx, state, admin, &vm)
}

fn remove_image(req: Request, state: &AppState, admin: &AdminSession) -> ResultResp {
    let htmx = is_htmx(&req);
    let path = form_body(req)?.text("path");

    let mut uploader = state.uploader(load_draft(state, admin)?);

    let error = match uploader.remove(&state.images, &path) {
        Ok(removed) => {
            tracing::info!(path = %removed.path, "image removed");
            save_draft(state, admin, uploader.images())?;
            None
        }
        Err(e) => Some(e.to_string()),
    };

    let vm = UploaderVm {
        uploader: &uploader,
        error,
        last_batch: None,
    };
    render_uploader(htmx, state, admin, &vm)
}
