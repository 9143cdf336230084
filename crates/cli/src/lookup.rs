// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Resolution of user-typed service and professional references.

use color_eyre::Result;
use color_eyre::eyre::eyre;
use salon_booking_domain::{Professional, ProfessionalChoice, Service};
use salon_booking_wizard::CollectionView;

/// Whether `needle` names a record by exact identifier or case-insensitive name.
fn matches(id: &str, name: &str, needle: &str) -> bool {
    let needle: &str = needle.trim();
    id == needle || name.to_lowercase() == needle.to_lowercase()
}

/// Finds a service by identifier or name.
pub fn find_service<'a>(services: &'a [Service], needle: &str) -> Option<&'a Service> {
    services
        .iter()
        .find(|service| matches(service.id.value(), &service.name, needle))
}

/// Finds a professional by identifier or name.
pub fn find_professional<'a>(
    professionals: &'a [Professional],
    needle: &str,
) -> Option<&'a Professional> {
    professionals
        .iter()
        .find(|professional| matches(professional.id.value(), &professional.name, needle))
}

/// Turns the `--professional` argument into a choice against the settled
/// professionals view.
///
/// # Errors
///
/// Returns the view's failure message when the professionals could not be
/// loaded, or an error when no offered professional matches `needle`.
pub fn choose_professional(
    view: CollectionView<'_, Professional>,
    needle: Option<&str>,
) -> Result<ProfessionalChoice> {
    let Some(needle) = needle else {
        return Ok(ProfessionalChoice::NoPreference);
    };
    let offered: &[Professional] = match view {
        CollectionView::Failed { message } => return Err(eyre!("{message}")),
        CollectionView::Ready(offered) => offered,
        CollectionView::Idle | CollectionView::Loading | CollectionView::Empty { .. } => &[],
    };
    find_professional(offered, needle)
        .cloned()
        .map(ProfessionalChoice::Specific)
        .ok_or_else(|| eyre!("No professional offering this service matches '{needle}'"))
}
