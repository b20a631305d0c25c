//! Building display formatting

use crate::metrics::{net_operating_income, occupancy, rent_per_sqm, unit_occupancy};
use crate::models::{Building, Money};

use super::{bullet_list, percent};

pub fn format_building_details(building: &Building) -> String {
    let mut output = String::new();

    output.push_str(&format!("Building: {}\n", building.name));
    output.push_str(&format!("  ID:                 {}\n", building.id));
    output.push_str(&format!("  Type:               {}\n", building.building_type));
    output.push_str(&format!("  Units:              {}\n", building.units));
    output.push_str(&format!(
        "  Reported Occupancy: {:.1}%\n",
        building.occupancy_rate
    ));
    if let Some(year) = building.construction_year {
        output.push_str(&format!("  Built:              {}\n", year));
    }
    if let Some(rating) = &building.energy_rating {
        output.push_str(&format!("  Energy Rating:      {}\n", rating));
    }
    if let Some(cert) = &building.certification {
        output.push_str(&format!("  Certification:      {}\n", cert));
    }

    if let Some(location) = &building.location {
        output.push_str("\nLocation\n");
        output.push_str(&format!("  Address:        {}\n", location.one_line()));
        output.push_str(&format!(
            "  Coordinates:    {:.4}, {:.4}\n",
            location.latitude, location.longitude
        ));
        output.push_str(&format!("  Walkability:    {}/100\n", location.walkability_score));
        output.push_str(&format!("  Transport:      {}\n", location.transportation_access));
        output.push_str(&format!("  Crime Rate:     {}\n", location.crime_rate));
        output.push_str(&format!(
            "  Market:         {} prices, {} demand, {} outlook\n",
            location.market_trends.price_trend,
            location.market_trends.demand_level,
            location.market_trends.future_outlook
        ));
    }

    if building.last_year_income.is_some() || building.cap_rate.is_some() {
        output.push_str("\nFinancials\n");
        if let Some(income) = building.last_year_income {
            let costs = building.maintenance_cost.unwrap_or_else(Money::zero);
            output.push_str(&format!("  Last Year Income: {}\n", income.format_whole()));
            output.push_str(&format!("  Maintenance Cost: {}\n", costs.format_whole()));
            output.push_str(&format!(
                "  NOI:              {}\n",
                net_operating_income(income, costs).format_whole()
            ));
        }
        if let Some(cap) = building.cap_rate {
            output.push_str(&format!("  Cap Rate:         {:.1}%\n", cap));
        }
        if let Some(vacancy) = building.vacancy_rate {
            output.push_str(&format!("  Vacancy Rate:     {:.1}%\n", vacancy));
        }
    }

    if let Some(mix) = &building.tenancy_mix {
        output.push_str("\nTenancy Mix\n");
        output.push_str(&format!("  Residential Units: {}\n", mix.residential_units));
        output.push_str(&format!("  Commercial Units:  {}\n", mix.commercial_units));
        output.push_str(&format!(
            "  Avg Lease Term:    {} months\n",
            mix.avg_lease_term_months
        ));
    }

    if !building.occupancy_trend.is_empty() {
        let trend: Vec<String> = building
            .occupancy_trend
            .iter()
            .map(|v| format!("{:.0}%", v))
            .collect();
        output.push_str(&format!("\nOccupancy Trend: {}\n", trend.join(" → ")));
    }

    if !building.maintenance_history.is_empty() {
        output.push_str("\nMaintenance History\n");
        output.push_str(&bullet_list(&building.maintenance_history, "  "));
    }

    if !building.estates.is_empty() {
        let area = occupancy(&building.estates);
        let units = unit_occupancy(&building.estates);
        output.push_str(&format!(
            "\nUnits (physical occupancy {} of {:.1} m², {}/{} units)\n",
            percent(area.rate),
            area.total_area,
            units.occupied,
            units.total
        ));
        output.push_str(&format!(
            "  {:<4}  {:<6}  {:<10}  {:>8}  {:>8}  {:>9}  {}\n",
            "ID", "Unit", "Kind", "Size", "Rent", "Rent/m²", "Status",
        ));
        for estate in &building.estates {
            let per_sqm = rent_per_sqm(estate.current_rent, estate.size_sqm)
                .map(|v| format!("€{:.2}", v))
                .unwrap_or_else(|| "-".into());
            output.push_str(&format!(
                "  {:<4}  {:<6}  {:<10}  {:>8}  {:>8}  {:>9}  {}\n",
                estate.id.as_str(),
                estate.unit_number,
                estate.kind.to_string(),
                format!("{:.1} m²", estate.size_sqm),
                estate.current_rent.format_whole(),
                per_sqm,
                estate.occupancy,
            ));
        }
    }

    output
}
