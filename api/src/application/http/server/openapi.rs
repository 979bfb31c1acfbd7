use crate::application::http::{
    consultation::router::ConsultationApiDoc, diagnostic::router::DiagnosticApiDoc,
    product_scan::router::ProductScanApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HairSphere API"
    ),
    nest(
        (path = "/diagnostic", api = DiagnosticApiDoc),
        (path = "/consultation", api = ConsultationApiDoc),
        (path = "/product-scan", api = ProductScanApiDoc),
    )
)]
pub struct ApiDoc;
