//! Estate (unit) display formatting

use crate::metrics::{payment_reliability, rent_per_sqm};
use crate::models::Estate;

use super::{bullet_list, percent};

pub fn format_estate_details(estate: &Estate, date_format: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Unit {}\n", estate.unit_number));
    output.push_str(&format!("  ID:           {}\n", estate.id));
    output.push_str(&format!("  Kind:         {}\n", estate.kind));
    output.push_str(&format!("  Size:         {:.1} m²\n", estate.size_sqm));
    output.push_str(&format!("  Current Rent: {}\n", estate.current_rent.format_whole()));
    output.push_str(&format!(
        "  Rent/m²:      {}\n",
        rent_per_sqm(estate.current_rent, estate.size_sqm)
            .map(|v| format!("€{:.2}", v))
            .unwrap_or_else(|| "-".into())
    ));
    output.push_str(&format!("  Status:       {}\n", estate.occupancy));
    output.push_str(&format!("  Condition:    {}\n", estate.condition));
    if let Some(costs) = estate.turnover_costs {
        output.push_str(&format!("  Turnover:     {}\n", costs.format_whole()));
    }

    if let Some(tenant) = &estate.tenant {
        output.push_str("\nTenant\n");
        output.push_str(&format!("  Type:        {}\n", tenant.tenant_type));
        output.push_str(&format!(
            "  Lease Start: {}\n",
            tenant.lease_start.format(date_format)
        ));
        output.push_str(&format!(
            "  Duration:    {} months\n",
            tenant.lease_duration_months
        ));
        if let Some(end) = estate.lease_end() {
            output.push_str(&format!("  Lease End:   {}\n", end.format(date_format)));
        }
        output.push_str(&format!(
            "  Payments:    {} on time, {} late of {} ({} reliable)\n",
            tenant.payments.on_time,
            tenant.payments.late,
            tenant.payments.total,
            percent(payment_reliability(&tenant.payments))
        ));
        output.push_str("  History:\n");
        output.push_str(&bullet_list(&tenant.history, "    "));
        output.push_str("  Special Requirements:\n");
        output.push_str(&bullet_list(&tenant.special_requirements, "    "));
    }

    if let Some(lease) = &estate.lease {
        output.push_str("\nLease Terms\n");
        output.push_str(&format!("  Monthly Rent:     {}\n", lease.monthly_rent.format_whole()));
        output.push_str(&format!(
            "  Security Deposit: {}\n",
            lease.security_deposit.format_whole()
        ));
        output.push_str(&format!("  Payment Terms:    {}\n", lease.payment_terms));
        output.push_str(&format!(
            "  Term:             {} to {}\n",
            lease.start_date.format(date_format),
            lease.end_date.format(date_format)
        ));
        output.push_str(&format!("  Renewal:          {}\n", lease.renewal_options));
        output.push_str("  Included Utilities:\n");
        output.push_str(&bullet_list(&lease.included_utilities, "    "));
        output.push_str("  Special Conditions:\n");
        output.push_str(&bullet_list(&lease.special_conditions, "    "));
    }

    output
}
