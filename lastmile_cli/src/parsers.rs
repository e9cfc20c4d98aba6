use jiff::civil::Time;

pub fn parse_clock(input: &str) -> Result<Time, String> {
    Time::strptime("%H:%M", input.trim())
        .map_err(|_| String::from("Invalid time, expected HH:MM"))
}
