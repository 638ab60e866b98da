use sedna_gfw::effort::EffortRecord;

/// Sentinel shown in the month selector when no month filter is active.
pub const ALL_MONTHS: &str = "All Months";
/// Sentinel shown in the vessel selector when no vessel filter is active.
pub const ALL_VESSELS: &str = "All Vessels";

/// Month selection: everything, or one zero-padded month key.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MonthFilter {
    #[default]
    All,
    Month(String),
}

impl MonthFilter {
    /// Interpret a selector value. Accepts the "All Months"/"all"
    /// sentinels and zero-pads bare month numbers ("3" -> "03"); any
    /// other value is kept verbatim and will simply match no record.
    pub fn parse(input: &str) -> MonthFilter {
        let trimmed = input.trim();
        if trimmed.eq_ignore_ascii_case("all") || trimmed.eq_ignore_ascii_case(ALL_MONTHS) {
            return MonthFilter::All;
        }
        match trimmed.parse::<u32>() {
            Ok(month) if (1..=12).contains(&month) => MonthFilter::Month(format!("{month:02}")),
            _ => MonthFilter::Month(trimmed.to_string()),
        }
    }

    pub fn matches(&self, record: &EffortRecord) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Month(month) => record.month_key() == Some(month.as_str()),
        }
    }
}

/// Vessel selection: everything, or one exact vessel id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum VesselFilter {
    #[default]
    All,
    Vessel(String),
}

impl VesselFilter {
    /// Interpret a selector value, accepting the "All Vessels"/"all"
    /// sentinels.
    pub fn parse(input: &str) -> VesselFilter {
        let trimmed = input.trim();
        if trimmed.eq_ignore_ascii_case("all") || trimmed.eq_ignore_ascii_case(ALL_VESSELS) {
            return VesselFilter::All;
        }
        VesselFilter::Vessel(trimmed.to_string())
    }

    pub fn matches(&self, record: &EffortRecord) -> bool {
        match self {
            VesselFilter::All => true,
            VesselFilter::Vessel(id) => record.vessel_id == *id,
        }
    }
}
