use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "DriverHub API", version = "1.0.0"),
    paths(
        crate::auth::handlers::register,
        crate::auth::handlers::login,
        crate::auth::handlers::refresh_token,
        crate::auth::handlers::logout,
        crate::applications::handlers::create_application,
        crate::applications::handlers::list_applications,
        crate::applications::handlers::toggle_archive,
    ),
    components(schemas(
        crate::auth::dto::RegisterRequest,
        crate::auth::dto::LoginRequest,
        crate::auth::dto::AuthResponse,
        crate::auth::dto::TokenResponse,
        crate::auth::dto::MessageResponse,
        crate::auth::dto::PublicUser,
        crate::applications::dto::CreateApplicationRequest,
        crate::applications::dto::ApplicationPage,
        crate::applications::dto::Pagination,
        crate::applications::repo_types::Application,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Authentication endpoints"),
        (name = "applications", description = "Driver application endpoints"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_document_lists_all_routes() {
        let doc = ApiDoc::openapi();
        let paths: Vec<_> = doc.paths.paths.keys().cloned().collect();
        assert!(paths.contains(&"/auth/register".to_string()));
        assert!(paths.contains(&"/auth/login".to_string()));
        assert!(paths.contains(&"/auth/refresh-token".to_string()));
        assert!(paths.contains(&"/auth/logout".to_string()));
        assert!(paths.contains(&"/applications".to_string()));
        assert!(paths.contains(&"/applications/{id}/toggle-archive".to_string()));
    }

    #[test]
    fn bearer_scheme_is_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }
}
