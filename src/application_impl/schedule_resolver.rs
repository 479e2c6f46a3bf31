use crate::domain_model::ScheduleView;
use crate::domain_port::VehicleRecord;

/// Project the authorization-scoped schedule for one principal out of the
/// full vehicle list.
///
/// In-order scan; vehicles assigned to someone else are skipped. Waypoint
/// lists pass through order-preserved, including partially-filled entries.
/// Duplicate day keys across vehicles of the same driver overwrite rather
/// than merge: the later-scanned vehicle's list replaces the earlier one.
/// Empty waypoint lists never enter the view, so every present day key
/// carries at least one waypoint. A principal with no assigned vehicle
/// gets an empty mapping, which is not an error.
pub fn resolve_schedule(principal_name: &str, vehicles: &[VehicleRecord]) -> ScheduleView {
    let mut view = ScheduleView::new();

    for vehicle in vehicles {
        if vehicle.assigned_driver.as_deref() != Some(principal_name) {
            continue;
        }
        for (day, waypoints) in &vehicle.schedule {
            if waypoints.is_empty() {
                continue;
            }
            view.insert(day.clone(), waypoints.clone());
        }
    }

    view
}
