//! Employee REST API handlers

use crate::{ApiError, ApiResult, AppState, EmployeeDto};

use axum::{
    Json,
    extract::{Path, State},
};

pub const FETCH_SUCCESS_MESSAGE: &str = "Employees fetched and saved successfully";

// =============================================================================
// Handlers
// =============================================================================

/// GET /employees
pub async fn list_employees(State(state): State<AppState>) -> ApiResult<Json<Vec<EmployeeDto>>> {
    let employees = state
        .service
        .list_employees()
        .await
        .map_err(|e| ApiError::internal(format!("Error retrieving employees: {}", e.reason())))?;

    Ok(Json(employees.into_iter().map(EmployeeDto::from).collect()))
}

/// GET /employees/{id}
///
/// 404 when the id is unknown, 500 for any other failure.
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<EmployeeDto>> {
    let employee = state.service.get_employee_by_id(id).await.map_err(|e| {
        if e.is_not_found() {
            ApiError::not_found(e.reason())
        } else {
            ApiError::internal(format!(
                "Error retrieving employee with ID {}: {}",
                id,
                e.reason()
            ))
        }
    })?;

    Ok(Json(employee.into()))
}

/// GET /employees/annual-salary/{id}
///
/// Every failure, an unknown id included, is reported as 500.
pub async fn get_annual_salary(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<f64>> {
    let annual = state.service.compute_annual_salary(id).await.map_err(|e| {
        ApiError::internal(format!(
            "Error computing annual salary for employee with ID {}: {}",
            id,
            e.reason()
        ))
    })?;

    Ok(Json(annual))
}

/// POST /employees/fetch
pub async fn fetch_employees(State(state): State<AppState>) -> ApiResult<&'static str> {
    let written = state
        .service
        .fetch_and_save_all_employees()
        .await
        .map_err(|e| {
            ApiError::internal(format!("Error fetching and saving employees: {}", e.reason()))
        })?;

    log::info!("Sync request stored {} employees", written);
    Ok(FETCH_SUCCESS_MESSAGE)
}
