use crate::constants::{COMMUTE_DAYS_PER_MONTH, ELECTRICITY_FACTOR_KG_PER_KWH};

/// Commute mode with its emission factor in grams CO₂e per km
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransportMode {
    #[default]
    Car,
    Motorbike,
    Bus,
    Metro,
    Bicycle,
}

impl TransportMode {
    pub const ALL: [Self; 5] = [Self::Car, Self::Motorbike, Self::Bus, Self::Metro, Self::Bicycle];

    #[must_use]
    pub const fn grams_per_km(self) -> f64 {
        match self {
            Self::Car => 192.0,
            Self::Motorbike => 103.0,
            Self::Bus => 105.0,
            Self::Metro => 41.0,
            Self::Bicycle => 0.0,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Car => "Car (petrol)",
            Self::Motorbike => "Motorbike",
            Self::Bus => "Bus",
            Self::Metro => "Metro",
            Self::Bicycle => "Bicycle / Walk",
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.label() == label)
    }
}

/// Calculator inputs as typed into the form
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CarbonInputs {
    /// One-way daily commute distance in km
    pub distance_km: f64,
    /// Emission factor of the commute, grams per km
    pub transport_factor: f64,
    /// Monthly household electricity use in kWh
    pub electricity_kwh: f64,
}

/// Monthly footprint broken down by source, in kg CO₂e
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarbonFootprint {
    pub commute_kg: f64,
    pub energy_kg: f64,
    pub total_kg: f64,
}

impl CarbonInputs {
    /// Build inputs from the form's text fields and selected mode
    ///
    /// Fields are read by their leading number, so `"12km"` is 12 and text
    /// without one counts as zero.
    #[must_use]
    pub fn from_fields(distance: &str, mode: TransportMode, electricity: &str) -> Self {
        Self {
            distance_km: parse_or_zero(distance),
            transport_factor: mode.grams_per_km(),
            electricity_kwh: parse_or_zero(electricity),
        }
    }

    #[must_use]
    pub fn footprint(&self) -> CarbonFootprint {
        let commute_kg = self.distance_km * self.transport_factor * COMMUTE_DAYS_PER_MONTH / 1000.0;
        let energy_kg = self.electricity_kwh * ELECTRICITY_FACTOR_KG_PER_KWH;
        CarbonFootprint {
            commute_kg,
            energy_kg,
            total_kg: commute_kg + energy_kg,
        }
    }
}

impl CarbonFootprint {
    #[must_use]
    pub fn total_text(&self) -> String {
        format!("{:.2} kg CO₂e", self.total_kg)
    }

    #[must_use]
    pub fn breakdown_text(&self) -> String {
        format!("Commute: {:.2} kg | Domestic Energy: {:.2} kg", self.commute_kg, self.energy_kg)
    }
}

fn parse_or_zero(raw: &str) -> f64 {
    let raw = raw.trim_start();
    raw[..numeric_prefix_len(raw)]
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Length of the longest leading decimal literal (sign, digits, fraction, exponent)
fn numeric_prefix_len(raw: &str) -> usize {
    let bytes = raw.as_bytes();
    let digits_from = |mut i: usize| {
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        i
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_end = digits_from(end);
    let mut has_digits = int_end > end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        if has_digits || frac_end > end + 1 {
            has_digits = true;
            end = frac_end;
        }
    }
    if !has_digits {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exp_end = digits_from(end + 1 + sign);
        if exp_end > end + 1 + sign {
            end = exp_end;
        }
    }
    end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footprint_formula() {
        let inputs = CarbonInputs {
            distance_km: 10.0,
            transport_factor: 192.0,
            electricity_kwh: 100.0,
        };
        let footprint = inputs.footprint();
        assert!((footprint.commute_kg - 57.6).abs() < 1e-9);
        assert!((footprint.energy_kg - 80.0).abs() < 1e-9);
        assert!((footprint.total_kg - 137.6).abs() < 1e-9);
    }

    #[test]
    fn test_unparseable_fields_count_as_zero() {
        let inputs = CarbonInputs::from_fields("abc", TransportMode::Bicycle, " 50 ");
        assert_eq!(inputs.distance_km, 0.0);
        assert_eq!(inputs.transport_factor, 0.0);
        assert_eq!(inputs.electricity_kwh, 50.0);
        assert!((inputs.footprint().total_kg - 40.0).abs() < 1e-9);
        assert_eq!(CarbonInputs::from_fields("", TransportMode::Car, "").distance_km, 0.0);
    }

    #[test]
    fn test_fields_use_leading_number() {
        let inputs = CarbonInputs::from_fields("12km", TransportMode::Metro, "  7.5 kWh");
        assert_eq!(inputs.distance_km, 12.0);
        assert_eq!(inputs.electricity_kwh, 7.5);
        assert_eq!(parse_or_zero("-3.25e2x"), -325.0);
        assert_eq!(parse_or_zero(".5."), 0.5);
        assert_eq!(parse_or_zero("4e"), 4.0);
        assert_eq!(parse_or_zero("1.2.3"), 1.2);
        assert_eq!(parse_or_zero("-"), 0.0);
        assert_eq!(parse_or_zero("."), 0.0);
        assert_eq!(parse_or_zero("1e999"), 0.0);
    }

    #[test]
    fn test_display_text() {
        let footprint = CarbonInputs::from_fields("10", TransportMode::Metro, "0").footprint();
        assert_eq!(footprint.total_text(), "12.30 kg CO₂e");
        assert_eq!(footprint.breakdown_text(), "Commute: 12.30 kg | Domestic Energy: 0.00 kg");
    }

    #[test]
    fn test_transport_mode_labels_round_trip() {
        for mode in TransportMode::ALL {
            assert_eq!(TransportMode::from_label(mode.label()), Some(mode));
        }
        assert!(TransportMode::from_label("Rocket").is_none());
    }
}
