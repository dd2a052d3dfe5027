//! Handlers for the RTI generator and the sector complaint guides.

use axum::Json;

use crate::error::ApiError;
use crate::guides::rti::{self, RtiBundle, RtiRequest};
use crate::guides::sectors::{SectorBundle, SectorData, SectorForm};
use crate::http::{ok, Envelope};

pub async fn rti(
    Json(request): Json<RtiRequest>,
) -> Result<Json<Envelope<RtiBundle>>, ApiError> {
    Ok(ok(rti::build(&request)?))
}

/// Shared handler behind every sector route; the router binds each route
/// to its [`SectorData`] entry.
pub async fn sector(
    sector: &'static SectorData,
    Json(form): Json<SectorForm>,
) -> Result<Json<Envelope<SectorBundle>>, ApiError> {
    Ok(ok(crate::guides::sectors::build(sector, &form)?))
}
