use axum::{extract::Path, Json};
use serde::Serialize;

use contracts::domain::a001_cabinet_style::{CabinetStyle, CABINET_STYLES};
use contracts::domain::a002_backsplash::{BacksplashOption, BACKSPLASH_OPTIONS};
use contracts::domain::a003_flooring::{FlooringOption, FLOORING_OPTIONS};
use contracts::domain::a004_wall_color::{PresetColor, PRESET_COLORS};
use contracts::enums::category::Category;

use crate::shared::error::ApiError;

/// Все каталоги, ключи совпадают с кодами категорий
#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    #[serde(rename = "wall-colors")]
    pub wall_colors: &'static [PresetColor],
    pub cabinets: &'static [CabinetStyle],
    pub backsplash: &'static [BacksplashOption],
    pub flooring: &'static [FlooringOption],
}

/// GET /api/catalog
pub async fn list_all() -> Json<CatalogResponse> {
    Json(CatalogResponse {
        wall_colors: PRESET_COLORS,
        cabinets: CABINET_STYLES,
        backsplash: BACKSPLASH_OPTIONS,
        flooring: FLOORING_OPTIONS,
    })
}

/// GET /api/catalog/:category
pub async fn get_by_category(
    Path(code): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let category = Category::from_code(&code).ok_or(ApiError::UnknownCategory(code))?;
    let value = match category {
        Category::WallColors => serde_json::to_value(PRESET_COLORS)?,
        Category::Cabinets => serde_json::to_value(CABINET_STYLES)?,
        Category::Backsplash => serde_json::to_value(BACKSPLASH_OPTIONS)?,
        Category::Flooring => serde_json::to_value(FLOORING_OPTIONS)?,
    };
    Ok(Json(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_all() {
        let Json(response) = list_all().await;
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["wall-colors"].as_array().unwrap().len(), 8);
        assert_eq!(json["cabinets"][0]["id"], "natural-wood");
        assert_eq!(json["backsplash"][3]["pattern"], "mosaic");
        assert_eq!(json["flooring"][1]["name"], "Dark Walnut");
    }

    #[tokio::test]
    async fn test_get_by_category() {
        let Json(value) = get_by_category(Path("cabinets".to_string())).await.unwrap();
        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 4);
        assert_eq!(items[1]["id"], "dark-stain");
        assert_eq!(items[1]["description"], "Rich dark wood finish");
    }

    #[tokio::test]
    async fn test_unknown_category() {
        let err = get_by_category(Path("lighting".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::UnknownCategory(ref code) if code == "lighting"));
        assert_eq!(err.status(), axum::http::StatusCode::NOT_FOUND);
    }
}
