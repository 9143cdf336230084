// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ClientError;
use crate::query::TableQuery;
use crate::remote::RemoteDataClient;
use salon_booking_domain::{
    AvailableSlot, Professional, ProfessionalId, Service, ServiceId, format_booking_date,
};
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;
use time::Date;
use tracing::debug;

/// Name of the remote availability procedure.
pub const AVAILABLE_SLOTS_FUNCTION: &str = "get_available_slots";

const SERVICES_TABLE: &str = "services";
const PROFESSIONAL_SERVICES_TABLE: &str = "professional_services";

/// One row of the `professional_services` join with the professional embedded.
///
/// The embed is null when the joined professional fails the embedded filter.
#[derive(Debug, Deserialize)]
struct ProfessionalServiceRow {
    professionals: Option<Professional>,
}

/// Typed reads of the booking catalog and availability.
#[derive(Clone)]
pub struct BookingCatalog {
    client: Arc<dyn RemoteDataClient>,
}

impl BookingCatalog {
    /// Wraps a data client.
    #[must_use]
    pub fn new(client: Arc<dyn RemoteDataClient>) -> Self {
        Self { client }
    }

    /// Active services ordered by name.
    ///
    /// # Errors
    ///
    /// Returns a `ClientError` if the query fails or a row is malformed.
    pub async fn active_services(&self) -> Result<Vec<Service>, ClientError> {
        let query: TableQuery = TableQuery::table(SERVICES_TABLE)
            .eq("is_active", true)
            .order_by("name");
        let rows: Vec<Value> = self.client.query(&query).await?;
        decode_rows(rows, SERVICES_TABLE)
    }

    /// Active professionals offering `service_id`, ordered by name.
    ///
    /// An empty list is a valid answer.
    ///
    /// # Errors
    ///
    /// Returns a `ClientError` if the query fails or a row is malformed.
    pub async fn professionals_for_service(
        &self,
        service_id: &ServiceId,
    ) -> Result<Vec<Professional>, ClientError> {
        let query: TableQuery = TableQuery::table(PROFESSIONAL_SERVICES_TABLE)
            .select("professionals(*)")
            .eq("service_id", service_id)
            .eq("professionals.is_active", true);
        let rows: Vec<ProfessionalServiceRow> =
            decode_rows(self.client.query(&query).await?, PROFESSIONAL_SERVICES_TABLE)?;

        let mut professionals: Vec<Professional> = rows
            .into_iter()
            .filter_map(|row| row.professionals)
            .filter(|professional| professional.active)
            .collect();
        professionals.sort_by(|a, b| a.name.cmp(&b.name));

        debug!(
            service_id = service_id.value(),
            count = professionals.len(),
            "Loaded professionals for service"
        );
        Ok(professionals)
    }

    /// Bookable slots for a service on a date.
    ///
    /// # Arguments
    ///
    /// * `service_id` - The selected service
    /// * `professional_id` - The chosen professional, or `None` for any
    /// * `date` - The selected date
    ///
    /// # Errors
    ///
    /// Returns a `ClientError` if the call fails or the result is malformed.
    pub async fn available_slots(
        &self,
        service_id: &ServiceId,
        professional_id: Option<&ProfessionalId>,
        date: Date,
    ) -> Result<Vec<AvailableSlot>, ClientError> {
        let args: Value = available_slots_args(service_id, professional_id, date)?;
        let result: Value = self.client.call(AVAILABLE_SLOTS_FUNCTION, &args).await?;

        if result.is_null() {
            return Ok(Vec::new());
        }
        serde_json::from_value(result).map_err(|err| ClientError::Decode {
            context: format!("result of '{AVAILABLE_SLOTS_FUNCTION}'"),
            message: err.to_string(),
        })
    }
}

/// Builds the named arguments of the availability procedure.
///
/// # Errors
///
/// Returns `ClientError::InvalidRequest` if the date cannot be formatted.
pub(crate) fn available_slots_args(
    service_id: &ServiceId,
    professional_id: Option<&ProfessionalId>,
    date: Date,
) -> Result<Value, ClientError> {
    let date: String =
        format_booking_date(date).map_err(|err| ClientError::InvalidRequest(err.to_string()))?;
    Ok(json!({
        "p_professional_id": professional_id.map(ProfessionalId::value),
        "p_service_id": service_id.value(),
        "p_date": date,
    }))
}

fn decode_rows<T>(rows: Vec<Value>, table: &str) -> Result<Vec<T>, ClientError>
where
    T: for<'de> Deserialize<'de>,
{
    rows.into_iter()
        .map(|row| {
            serde_json::from_value(row).map_err(|err| ClientError::Decode {
                context: format!("row of '{table}'"),
                message: err.to_string(),
            })
        })
        .collect()
}
