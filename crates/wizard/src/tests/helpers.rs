// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::BookingWizard;
use async_trait::async_trait;
use salon_booking_client::{BookingCatalog, ClientError, RemoteDataClient, TableQuery};
use salon_booking_domain::{AvailableSlot, BookingWindow, Professional, Service};
use serde_json::{Value, json};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use time::macros::date;
use time::{Date, OffsetDateTime};

/// One scripted answer of the availability procedure.
#[derive(Debug, Clone)]
pub struct Reply {
    delay: Duration,
    result: Result<Value, ClientError>,
    panics: bool,
}

impl Reply {
    pub fn slots(slots: &[AvailableSlot]) -> Self {
        Self {
            delay: Duration::ZERO,
            result: Ok(serde_json::to_value(slots).unwrap()),
            panics: false,
        }
    }

    pub fn failure() -> Self {
        Self {
            delay: Duration::ZERO,
            result: Err(ClientError::Transport {
                message: String::from("connection reset"),
            }),
            panics: false,
        }
    }

    /// A reply whose fetch task panics instead of answering.
    pub fn panic() -> Self {
        Self {
            panics: true,
            ..Self::failure()
        }
    }

    pub const fn after(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// `(service id, professional id, date)` as sent to the procedure.
type SlotKey = (String, Option<String>, String);

/// In-memory data store with scripted availability answers.
///
/// Availability replies for a key are consumed in order; the last one keeps
/// answering. Unscripted keys answer with no slots.
#[derive(Default)]
pub struct ScriptedClient {
    services: Vec<Service>,
    professionals: HashMap<String, Vec<Professional>>,
    slots: Mutex<HashMap<SlotKey, VecDeque<Reply>>>,
    slot_calls: Mutex<Vec<Value>>,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_services(mut self, services: Vec<Service>) -> Self {
        self.services = services;
        self
    }

    pub fn with_professionals(mut self, service: &Service, professionals: Vec<Professional>) -> Self {
        self.professionals
            .insert(service.id.value().to_string(), professionals);
        self
    }

    pub fn with_slots(
        mut self,
        service: &Service,
        professional: Option<&Professional>,
        date: &str,
        reply: Reply,
    ) -> Self {
        let key: SlotKey = (
            service.id.value().to_string(),
            professional.map(|p| p.id.value().to_string()),
            date.to_string(),
        );
        self.slots
            .get_mut()
            .unwrap()
            .entry(key)
            .or_default()
            .push_back(reply);
        self
    }

    /// Arguments of every availability call, in call order.
    pub fn slot_calls(&self) -> Vec<Value> {
        self.slot_calls.lock().unwrap().clone()
    }

    fn next_reply(&self, key: &SlotKey) -> Reply {
        let mut slots = self.slots.lock().unwrap();
        match slots.get_mut(key) {
            Some(replies) if replies.len() > 1 => replies.pop_front().unwrap(),
            Some(replies) => replies
                .front()
                .cloned()
                .unwrap_or_else(|| Reply::slots(&[])),
            None => Reply::slots(&[]),
        }
    }
}

#[async_trait]
impl RemoteDataClient for ScriptedClient {
    async fn query(&self, query: &TableQuery) -> Result<Vec<Value>, ClientError> {
        match query.table_name() {
            "services" => Ok(self
                .services
                .iter()
                .map(|service| serde_json::to_value(service).unwrap())
                .collect()),
            "professional_services" => {
                let service_id: &str = query
                    .filters()
                    .iter()
                    .find(|filter| filter.field == "service_id")
                    .map(|filter| filter.value.as_str())
                    .unwrap_or_default();
                Ok(self
                    .professionals
                    .get(service_id)
                    .map(|professionals| {
                        professionals
                            .iter()
                            .map(|professional| json!({ "professionals": professional }))
                            .collect()
                    })
                    .unwrap_or_default())
            }
            other => Err(ClientError::Remote {
                status: 404,
                message: format!("unknown table {other}"),
            }),
        }
    }

    async fn call(&self, _function: &str, args: &Value) -> Result<Value, ClientError> {
        self.slot_calls.lock().unwrap().push(args.clone());
        let key: SlotKey = (
            args["p_service_id"].as_str().unwrap_or_default().to_string(),
            args["p_professional_id"].as_str().map(str::to_string),
            args["p_date"].as_str().unwrap_or_default().to_string(),
        );
        let reply: Reply = self.next_reply(&key);
        if !reply.delay.is_zero() {
            tokio::time::sleep(reply.delay).await;
        }
        assert!(!reply.panics, "scripted availability panic");
        reply.result
    }
}

pub fn create_test_window() -> BookingWindow {
    BookingWindow::starting(date!(2025 - 06 - 01)).unwrap()
}

pub fn create_wizard(client: &Arc<ScriptedClient>) -> BookingWizard {
    BookingWizard::new(BookingCatalog::new(client.clone()), create_test_window())
}

pub fn corte() -> Service {
    Service::new("svc-corte", "Corte", 30)
}

pub fn color() -> Service {
    Service::new("svc-color", "Color", 90).with_buffer(15)
}

pub fn lucia() -> Professional {
    Professional::new("pro-lucia", "Lucía")
}

pub fn martin() -> Professional {
    Professional::new("pro-martin", "Martín")
}

pub fn june_first() -> Date {
    date!(2025 - 06 - 01)
}

pub fn june_second() -> Date {
    date!(2025 - 06 - 02)
}

pub fn slot_at(start: OffsetDateTime, minutes: i64) -> AvailableSlot {
    AvailableSlot::new(start, start + time::Duration::minutes(minutes)).unwrap()
}
