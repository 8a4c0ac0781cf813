//! Gregorian to Hijri conversion endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use domain::{Conversion, UNAVAILABLE_MESSAGE};
use serde::{Deserialize, Serialize};

use crate::AppState;
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct HijriQuery {
    #[serde(default = "default_timezone")]
    pub timezone: String,
    pub date: Option<String>,
}

fn default_timezone() -> String {
    "UTC".to_string()
}

#[derive(Debug, Serialize)]
pub struct HijriResponse {
    pub gregorian: String,
    pub hijri: HijriFields,
}

/// Hijri half of the response. All fields except `formatted_en` are null
/// when conversion is disabled.
#[derive(Debug, Serialize)]
pub struct HijriFields {
    pub day: Option<u8>,
    pub month: Option<u8>,
    pub month_en: Option<&'static str>,
    pub month_ar: Option<&'static str>,
    pub year: Option<i32>,
    pub formatted_en: String,
}

impl From<Conversion> for HijriResponse {
    fn from(conversion: Conversion) -> Self {
        let hijri = match conversion.hijri {
            Some(date) => HijriFields {
                day: Some(date.day),
                month: Some(date.month.number()),
                month_en: Some(date.month.name_en()),
                month_ar: Some(date.month.name_ar()),
                year: Some(date.year),
                formatted_en: date.formatted_en(),
            },
            None => HijriFields {
                day: None,
                month: None,
                month_en: None,
                month_ar: None,
                year: None,
                formatted_en: UNAVAILABLE_MESSAGE.to_string(),
            },
        };

        Self {
            gregorian: conversion.gregorian.format("%Y-%m-%d").to_string(),
            hijri,
        }
    }
}

/// GET /api/hijri?timezone=..&date=.. — Hijri date for the given day, or
/// for today in `timezone` when `date` is omitted.
#[tracing::instrument(skip(state, query))]
pub async fn convert(
    State(state): State<Arc<AppState>>,
    query: Result<Query<HijriQuery>, QueryRejection>,
) -> Result<Json<HijriResponse>, ApiError> {
    let Query(query) = query?;

    let conversion = state
        .converter
        .convert_request(query.date.as_deref(), &query.timezone)?;

    Ok(Json(conversion.into()))
}

#[cfg(test)]
mod tests {
    use domain::{CalendarConverter, HijriDate, HijriMonth};

    use super::*;

    fn conversion(hijri: Option<HijriDate>) -> Conversion {
        Conversion {
            gregorian: chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            hijri,
        }
    }

    #[test]
    fn available_conversion_fills_every_field() {
        let response = HijriResponse::from(conversion(Some(HijriDate::new(
            1445,
            HijriMonth::JumadaAlThani,
            19,
        ))));
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "gregorian": "2024-01-01",
                "hijri": {
                    "day": 19,
                    "month": 6,
                    "month_en": "Jumada al-thani",
                    "month_ar": "جمادى الآخرة",
                    "year": 1445,
                    "formatted_en": "19 Jumada al-thani 1445 AH",
                }
            })
        );
    }

    #[test]
    fn fallback_nulls_hijri_fields() {
        let conversion = CalendarConverter::unavailable()
            .convert(chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
            .unwrap();
        let response = HijriResponse::from(conversion);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["gregorian"], "2024-01-01");
        for field in ["day", "month", "month_en", "month_ar", "year"] {
            assert!(json["hijri"][field].is_null(), "{field}");
        }
        assert_eq!(json["hijri"]["formatted_en"], UNAVAILABLE_MESSAGE);
    }
}
