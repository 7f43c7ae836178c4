use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use utoipa::{
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        auth::{self, get_me, login, patch_me, register, replace_me},
        comment::{
            self, create_comment, delete_comment, get_comment, get_post_comments, patch_comment,
            replace_comment,
        },
        follow::{self, get_followers, get_following, toggle_follow},
        like::{self, toggle_like},
        post::{
            self, create_post, delete_post, get_following_posts, get_post, get_posts, patch_post,
            replace_post,
        },
        tag::{self, get_tags},
        upload::{self, upload_image},
        user::{self, get_liked_posts, get_user_profile, get_user_posts},
    },
    state::AppState,
};

/// Request bodies up to this size are read, so oversized images are reported as a field
/// error instead of a rejected body.
const MAX_BODY_SIZE: usize = 10 * 1024 * 1024;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Inkwell API",
        description = "Social blogging backend: accounts, posts, tags, comments, likes and follows."
    ),
    paths(
        auth::register,
        auth::login,
        auth::get_me,
        auth::replace_me,
        auth::patch_me,
        user::get_user_profile,
        user::get_user_posts,
        user::get_liked_posts,
        follow::toggle_follow,
        follow::get_followers,
        follow::get_following,
        post::get_posts,
        post::create_post,
        post::get_following_posts,
        post::get_post,
        post::replace_post,
        post::patch_post,
        post::delete_post,
        like::toggle_like,
        comment::get_post_comments,
        comment::create_comment,
        comment::get_comment,
        comment::replace_comment,
        comment::patch_comment,
        comment::delete_comment,
        tag::get_tags,
        upload::upload_image,
    ),
    tags(
        (name = "auth", description = "Registration, login and the authenticated account"),
        (name = "user", description = "Public profiles and follows"),
        (name = "post", description = "Posts, tags and likes"),
        (name = "comment", description = "Comments on posts"),
        (name = "upload", description = "Image uploads"),
    ),
    modifiers(&TokenAuthAddon),
)]
pub struct ApiDoc;

/// Registers the `Authorization: Token <key>` scheme referenced by `security(("token" = []))`.
struct TokenAuthAddon;

impl Modify for TokenAuthAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "token",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                "Authorization",
                "Token authentication, formatted as `Token <key>`",
            ))),
        );
    }
}

/// API routes without state or middleware.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route(
            "/api/auth/me",
            get(get_me).put(replace_me).patch(patch_me),
        )
        .route("/api/users/{user_id}", get(get_user_profile))
        .route("/api/users/{user_id}/follow", post(toggle_follow))
        .route("/api/users/{user_id}/followers", get(get_followers))
        .route("/api/users/{user_id}/following", get(get_following))
        .route("/api/users/{user_id}/posts", get(get_user_posts))
        .route("/api/users/{user_id}/liked-posts", get(get_liked_posts))
        .route("/api/uploads/image", post(upload_image))
        .route("/api/posts", get(get_posts).post(create_post))
        .route("/api/posts/following", get(get_following_posts))
        .route(
            "/api/posts/{post_id}",
            get(get_post)
                .put(replace_post)
                .patch(patch_post)
                .delete(delete_post),
        )
        .route(
            "/api/posts/{post_id}/comments",
            get(get_post_comments).post(create_comment),
        )
        .route("/api/posts/{post_id}/like", post(toggle_like))
        .route(
            "/api/comments/{comment_id}",
            get(get_comment)
                .put(replace_comment)
                .patch(patch_comment)
                .delete(delete_comment),
        )
        .route("/api/tags", get(get_tags))
}

/// Complete application: API routes, API documentation, static media and middleware.
///
/// # Arguments
/// - `state` - Shared application state
/// - `media_url` - Path prefix uploaded media is served under, e.g. `/media/`
pub fn app(state: AppState, media_url: &str) -> Router {
    let media = ServeDir::new(state.media.root());
    let media_path = media_url.trim_end_matches('/');

    let router = router()
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()));

    let router = if media_path.is_empty() {
        router.fallback_service(media)
    } else {
        router.nest_service(media_path, media)
    };

    router
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
