use crate::application::http::{
    catalog::handlers::{
        get_languages::__path_get_languages, get_suggestions::__path_get_suggestions,
    },
    diagnosis::router::DiagnosisApiDoc,
    health::__path_health,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "CureTrackr API"
    ),
    paths(get_suggestions, get_languages, health),
    nest(
        (path = "/diagnosis", api = DiagnosisApiDoc),
    )
)]
pub struct ApiDoc;
