// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::lookup::{choose_professional, find_service};
use chrono_tz::Tz;
use color_eyre::Result;
use color_eyre::eyre::{WrapErr, eyre};
use salon_booking::Completion;
use salon_booking_domain::{
    AvailableSlot, ProfessionalChoice, Service, format_long_date, format_slot_range,
    parse_booking_date,
};
use salon_booking_wizard::{BookingWizard, CollectionView};
use time::Date;
use tracing::info;

/// Prints a settled collection view, or fails with its visitor-facing message.
fn print_view<T>(
    view: CollectionView<'_, T>,
    render: impl Fn(usize, &T) -> Result<String>,
) -> Result<()> {
    match view {
        CollectionView::Idle | CollectionView::Loading => Ok(()),
        CollectionView::Failed { message } => Err(eyre!("{message}")),
        CollectionView::Empty { title, guidance } => {
            println!("{title}. {guidance}");
            Ok(())
        }
        CollectionView::Ready(items) => {
            for (index, item) in items.iter().enumerate() {
                println!("{}", render(index + 1, item)?);
            }
            Ok(())
        }
    }
}

/// Loads the catalog and selects the service matching `needle`.
async fn choose_service(wizard: &mut BookingWizard, needle: &str) -> Result<()> {
    wizard.start()?;
    wizard.settle().await?;

    let service: Service = match wizard.services_view() {
        CollectionView::Failed { message } => return Err(eyre!("{message}")),
        CollectionView::Ready(services) => find_service(services, needle)
            .cloned()
            .ok_or_else(|| eyre!("No active service matches '{needle}'"))?,
        _ => return Err(eyre!("No active service matches '{needle}'")),
    };
    wizard.select_service(service)?;
    wizard.settle().await?;
    Ok(())
}

/// Runs the wizard up to the slot listing.
async fn load_slots(
    wizard: &mut BookingWizard,
    service: &str,
    date: &str,
    professional: Option<&str>,
) -> Result<()> {
    choose_service(wizard, service).await?;

    let choice: ProfessionalChoice =
        choose_professional(wizard.professionals_view(), professional)?;
    wizard.select_professional(choice)?;

    let date: Date = parse_booking_date(date)?;
    wizard
        .select_date(date)
        .wrap_err_with(|| format!("Cannot book on {date}"))?;
    wizard.settle().await?;
    Ok(())
}

pub async fn services(wizard: &mut BookingWizard) -> Result<()> {
    wizard.start()?;
    wizard.settle().await?;
    print_view(wizard.services_view(), |_, service: &Service| {
        Ok(format!(
            "{}\t{}\t{} min",
            service.id,
            service.name,
            service.total_duration_minutes()
        ))
    })
}

pub async fn professionals(wizard: &mut BookingWizard, service: &str) -> Result<()> {
    choose_service(wizard, service).await?;
    print_view(wizard.professionals_view(), |_, professional| {
        Ok(format!("{}\t{}", professional.id, professional.name))
    })
}

pub async fn slots(
    wizard: &mut BookingWizard,
    service: &str,
    date: &str,
    professional: Option<&str>,
    tz: Tz,
) -> Result<()> {
    load_slots(wizard, service, date, professional).await?;
    print_view(wizard.slots_view(), |position, slot: &AvailableSlot| {
        Ok(format!("{position}. {}", format_slot_range(slot, tz)?))
    })
}

pub async fn book(
    wizard: &mut BookingWizard,
    service: &str,
    date: &str,
    professional: Option<&str>,
    position: usize,
    tz: Tz,
) -> Result<()> {
    load_slots(wizard, service, date, professional).await?;

    let slot: AvailableSlot = match wizard.slots_view() {
        CollectionView::Ready(slots) => position
            .checked_sub(1)
            .and_then(|index| slots.get(index))
            .copied()
            .ok_or_else(|| eyre!("There is no slot number {position}; {} available", slots.len()))?,
        CollectionView::Failed { message } => return Err(eyre!("{message}")),
        CollectionView::Empty { title, guidance } => return Err(eyre!("{title}. {guidance}")),
        CollectionView::Idle | CollectionView::Loading => {
            return Err(eyre!("Slots are not loaded"));
        }
    };

    let completion: Completion = wizard
        .select_slot(slot)?
        .ok_or_else(|| eyre!("The selection did not complete"))?;
    info!(service = %completion.service.id, "Selection complete");

    println!("Servicio:    {}", completion.service.name);
    println!("Profesional: {}", completion.professional.label());
    println!("Fecha:       {}", format_long_date(completion.date));
    println!("Horario:     {}", format_slot_range(&completion.slot, tz)?);
    println!(
        "Duración:    {} min",
        completion.service.total_duration_minutes()
    );
    Ok(())
}
