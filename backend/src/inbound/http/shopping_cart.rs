//! Shopping cart export handler.
//!
//! ```text
//! GET /api/v1/recipes/download_shopping_cart
//! ```

use actix_web::http::header::{
    self, ContentDisposition, ContentType, DispositionParam, DispositionType,
};
use actix_web::{HttpResponse, get, web};
use tracing::info;

use crate::domain::Error;
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// File name offered to clients saving the export.
pub const SHOPPING_CART_FILENAME: &str = "shopping_cart.txt";

fn attachment() -> ContentDisposition {
    ContentDisposition {
        disposition: DispositionType::Attachment,
        parameters: vec![DispositionParam::Filename(SHOPPING_CART_FILENAME.to_owned())],
    }
}

/// Download the session user's aggregated shopping list as plain text.
///
/// Every ingredient of every recipe in the cart is summed per name and unit,
/// sorted by name, and rendered as a numbered list under a title line.
#[utoipa::path(
    get,
    path = "/api/v1/recipes/download_shopping_cart",
    description = "Download the aggregated shopping list for recipes in the cart.",
    responses(
        (
            status = 200,
            description = "Shopping list attachment",
            content_type = "text/plain",
            headers(
                ("Content-Disposition" = String, description = "attachment; filename=\"shopping_cart.txt\""),
                ("Cache-Control" = String, description = "Always no-store")
            ),
            body = String
        ),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["recipes"],
    operation_id = "downloadShoppingCart"
)]
#[get("/recipes/download_shopping_cart")]
pub async fn download_shopping_cart(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    let user_id = session.require_user_id()?;
    let export = state.shopping_list.shopping_list(&user_id).await?;
    info!(
        user_id = %user_id,
        rows = export.lines.len(),
        "shopping cart exported"
    );

    Ok(HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .insert_header(attachment())
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .body(export.document.to_string()))
}
