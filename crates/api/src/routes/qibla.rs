//! Qibla bearing endpoint.

use axum::Json;
use axum::extract::Query;
use axum::extract::rejection::QueryRejection;
use common::{Bearing, GeoPoint};
use domain::qibla_bearing;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Raw query parameters; parsed by [`GeoPoint::parse`] so failures carry a
/// readable message.
#[derive(Debug, Deserialize)]
pub struct QiblaQuery {
    pub lat: Option<String>,
    pub lon: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct QiblaResponse {
    pub bearing: Bearing,
}

/// GET /api/qibla?lat=..&lon=.. — bearing from the point toward the Kaaba.
#[tracing::instrument(skip(query))]
pub async fn bearing(
    query: Result<Query<QiblaQuery>, QueryRejection>,
) -> Result<Json<QiblaResponse>, ApiError> {
    let Query(query) = query?;
    let point = GeoPoint::parse(query.lat.as_deref(), query.lon.as_deref())?;

    let bearing = qibla_bearing(point);
    metrics::counter!("qibla_requests_total").increment(1);
    tracing::debug!(%point, %bearing, "computed qibla bearing");

    Ok(Json(QiblaResponse { bearing }))
}
