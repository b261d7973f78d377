use models_listings::api::{ErrorResponse, PropertyQueryParams};
use models_listings::{MatchMode, PropertyView};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(crate::inbound::http::list_properties),
    components(schemas(PropertyView, PropertyQueryParams, ErrorResponse, MatchMode)),
    tags(
        (name = "Properties", description = "Property listings search")
    )
)]
pub struct ApiDoc;
