// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Identifier of a service row in the data store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceId {
    value: String,
}

impl ServiceId {
    /// Creates a new `ServiceId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for ServiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// Identifier of a professional row in the data store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfessionalId {
    value: String,
}

impl ProfessionalId {
    /// Creates a new `ProfessionalId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for ProfessionalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// A bookable salon service.
///
/// Field names follow the `services` table so rows deserialize directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    /// Row identifier.
    pub id: ServiceId,
    /// Display name (e.g., "Corte").
    pub name: String,
    /// Optional marketing description.
    #[serde(default)]
    pub description: Option<String>,
    /// Time the professional is busy with the client.
    pub duration_minutes: u32,
    /// Cleanup time after the appointment, if any.
    #[serde(default)]
    pub buffer_minutes: Option<u32>,
    /// Whether the service is offered.
    #[serde(rename = "is_active")]
    pub active: bool,
    /// Row creation timestamp as stored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Service {
    /// Creates an active service with no description or buffer.
    #[must_use]
    pub fn new(id: &str, name: &str, duration_minutes: u32) -> Self {
        Self {
            id: ServiceId::new(id),
            name: name.to_string(),
            description: None,
            duration_minutes,
            buffer_minutes: None,
            active: true,
            created_at: None,
        }
    }

    /// Returns a copy of this service with the given buffer.
    #[must_use]
    pub const fn with_buffer(mut self, buffer_minutes: u32) -> Self {
        self.buffer_minutes = Some(buffer_minutes);
        self
    }

    /// Total time a booking of this service occupies: duration plus buffer.
    ///
    /// A missing buffer counts as zero.
    #[must_use]
    pub fn total_duration_minutes(&self) -> u32 {
        self.duration_minutes
            .saturating_add(self.buffer_minutes.unwrap_or(0))
    }
}

/// A salon professional who performs services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Professional {
    /// Row identifier.
    pub id: ProfessionalId,
    /// Display name.
    pub name: String,
    /// Contact email.
    #[serde(default)]
    pub email: Option<String>,
    /// Contact phone.
    #[serde(default)]
    pub phone: Option<String>,
    /// Whether the professional takes bookings.
    #[serde(rename = "is_active")]
    pub active: bool,
    /// Row creation timestamp as stored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Professional {
    /// Creates an active professional with no contact details.
    #[must_use]
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: ProfessionalId::new(id),
            name: name.to_string(),
            email: None,
            phone: None,
            active: true,
            created_at: None,
        }
    }
}

/// The visitor's answer to the "who should attend you" step.
///
/// `NoPreference` is a completed choice meaning any available professional.
/// A step that has not been answered yet is represented by the absence of a
/// `ProfessionalChoice`, never by this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfessionalChoice {
    /// Any available professional.
    NoPreference,
    /// A specific professional.
    Specific(Professional),
}

impl ProfessionalChoice {
    /// The identifier to send to the availability procedure; `None` means any.
    #[must_use]
    pub const fn professional_id(&self) -> Option<&ProfessionalId> {
        match self {
            Self::NoPreference => None,
            Self::Specific(professional) => Some(&professional.id),
        }
    }

    /// Human-readable label for summaries.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::NoPreference => "Sin preferencia",
            Self::Specific(professional) => &professional.name,
        }
    }
}

/// One bookable window returned by the availability procedure.
///
/// Slots are opaque: they are compared only by `(start_time, end_time)`.
/// Deserialization goes through [`AvailableSlot::new`], so a window that does
/// not end after it starts is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "SlotRecord")]
pub struct AvailableSlot {
    /// Window start.
    #[serde(serialize_with = "time::serde::rfc3339::serialize")]
    pub start_time: OffsetDateTime,
    /// Window end.
    #[serde(serialize_with = "time::serde::rfc3339::serialize")]
    pub end_time: OffsetDateTime,
}

/// Wire shape of a slot before validation.
#[derive(Deserialize)]
struct SlotRecord {
    #[serde(with = "time::serde::rfc3339")]
    start_time: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    end_time: OffsetDateTime,
}

impl TryFrom<SlotRecord> for AvailableSlot {
    type Error = DomainError;

    fn try_from(record: SlotRecord) -> Result<Self, Self::Error> {
        Self::new(record.start_time, record.end_time)
    }
}

impl AvailableSlot {
    /// Creates a slot, rejecting windows that do not end after they start.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidSlot` if `end_time <= start_time`.
    pub fn new(start_time: OffsetDateTime, end_time: OffsetDateTime) -> Result<Self, DomainError> {
        if end_time <= start_time {
            return Err(DomainError::InvalidSlot {
                start_time: start_time.to_string(),
                end_time: end_time.to_string(),
            });
        }
        Ok(Self {
            start_time,
            end_time,
        })
    }

    /// Length of the window in whole minutes.
    #[must_use]
    pub fn duration_minutes(&self) -> i64 {
        (self.end_time - self.start_time).whole_minutes()
    }
}
