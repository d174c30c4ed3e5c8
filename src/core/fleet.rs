use super::types::{
    Alert, AlertSeverity, AlertSettings, FinancialSettings, FleetStats, FundPoint, Projection,
    Vehicle,
};

const MILEAGE_WARNING_SHARE: f64 = 0.95;

pub fn calculate_age_distribution(vehicles: &[Vehicle], current_year: i32) -> [usize; 4] {
    let mut groups = [0; 4];
    for vehicle in vehicles {
        let bucket = match vehicle.age(current_year) {
            i32::MIN..=3 => 0,
            4..=7 => 1,
            8..=10 => 2,
            _ => 3,
        };
        groups[bucket] += 1;
    }
    groups
}

pub fn calculate_alerts(
    vehicles: &[Vehicle],
    settings: &AlertSettings,
    current_year: i32,
) -> Vec<Alert> {
    let mut alerts = Vec::new();
    for vehicle in vehicles {
        let age = vehicle.age(current_year);
        let trailer = vehicle.is_trailer();
        let max_age = if trailer {
            settings.trailer_max_age
        } else {
            settings.truck_max_age
        };

        if age > max_age {
            alerts.push(alert(
                vehicle,
                AlertSeverity::Critical,
                format!("Vehicle age ({age} years) exceeds maximum threshold ({max_age} years)"),
            ));
        }

        // Trailers carry no odometer reading of their own.
        let Some(mileage) = vehicle.current_mileage.filter(|_| !trailer) else {
            continue;
        };
        let limit = settings.truck_max_mileage;
        if mileage > limit {
            alerts.push(alert(
                vehicle,
                AlertSeverity::Critical,
                format!(
                    "Mileage ({}) exceeds maximum threshold ({})",
                    group_thousands(mileage),
                    group_thousands(limit)
                ),
            ));
        } else if mileage as f64 > limit as f64 * MILEAGE_WARNING_SHARE {
            alerts.push(alert(
                vehicle,
                AlertSeverity::Warning,
                format!(
                    "Mileage ({}) approaching maximum threshold ({})",
                    group_thousands(mileage),
                    group_thousands(limit)
                ),
            ));
        }
    }
    alerts
}

// Fund balance is the first quarterly snapshot, or the opening fund when there is none.
pub fn calculate_fleet_stats(
    vehicles: &[Vehicle],
    alerts: &[Alert],
    fund_points: &[FundPoint],
    settings: &FinancialSettings,
    current_year: i32,
) -> FleetStats {
    let total_vehicles = vehicles.len();
    let total_age = vehicles
        .iter()
        .map(|v| v.age(current_year) as f64)
        .sum::<f64>();
    let average_age = if total_vehicles > 0 {
        total_age / total_vehicles as f64
    } else {
        0.0
    };

    FleetStats {
        total_vehicles,
        average_age,
        fund_balance: fund_points
            .first()
            .map(|p| p.fund_balance)
            .unwrap_or(settings.initial_fund),
        alert_count: alerts.len(),
    }
}

pub fn upcoming_replacements(projections: &[Projection], limit: usize) -> Vec<Projection> {
    let mut upcoming = projections.to_vec();
    upcoming.sort_by_key(|p| p.replacement_month);
    upcoming.truncate(limit);
    upcoming
}

fn alert(vehicle: &Vehicle, severity: AlertSeverity, message: String) -> Alert {
    Alert {
        vehicle_id: vehicle.id,
        vehicle_name: vehicle.name.clone(),
        severity,
        message,
    }
}

fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
