use jiff::civil::Time;

/// Maximum number of packages a truck can carry.
pub const TRUCK_CAPACITY: usize = 16;

/// Average truck speed in miles per hour.
pub const TRUCK_SPEED_MPH: f64 = 18.0;

/// Every route starts and every truck is loaded at the hub.
pub const HUB_ADDRESS: &str = "4001 South 700 East";

/// Two drivers serve the three-truck fleet; the third truck waits for
/// whichever driver returns first.
pub const NUM_DRIVERS: usize = 2;

pub const MORNING_DEPART: Time = Time::constant(8, 0, 0, 0);
pub const DELAYED_ARRIVAL: Time = Time::constant(9, 5, 0, 0);

/// Package ids held at the depot until the delayed flight lands at 09:05.
pub const DELAYED_PACKAGE_IDS: [u32; 4] = [6, 25, 28, 32];

/// Package ids that can only go out on truck 2.
pub const TRUCK2_ONLY_IDS: [u32; 4] = [3, 18, 36, 38];

/// Groups that must travel on the same truck. Members overlap; the union of
/// all groups is pinned to truck 1.
pub const TOGETHER_GROUPS: [[u32; 3]; 3] = [[14, 15, 19], [16, 13, 19], [20, 13, 15]];

/// Package 9 ships with a wrong address until dispatch phones in the fix.
pub const WRONG_ADDRESS_PACKAGE_ID: u32 = 9;
pub const ADDRESS_CORRECTION_TIME: Time = Time::constant(10, 20, 0, 0);
pub const PLACEHOLDER_ADDRESS: &str = "300 State St, Salt Lake City, UT, 84103";
pub const CORRECTED_ADDRESS: &str = "410 S. State St., Salt Lake City, UT 84111";

/// Times at which the end-of-day report captures a full status snapshot.
pub const CAPTURE_TIMES: [Time; 6] = [
    Time::constant(8, 35, 0, 0),
    Time::constant(9, 25, 0, 0),
    Time::constant(9, 35, 0, 0),
    Time::constant(10, 25, 0, 0),
    Time::constant(12, 3, 0, 0),
    Time::constant(13, 12, 0, 0),
];
