//! Shared fixtures for the parsing pipeline tests
//!
//! The helpers here build dataset text in the shapes the parser has to
//! survive: clean ARFF, quoted names and fields, and data rows no reader
//! configuration accepts.

// Test modules
mod manual_tests;
mod sanitize_tests;
mod strategy_tests;

/// Classic small ARFF file with typed columns and an in-data comment
pub fn create_weather_arff() -> String {
    r#"% Toy forecasting dataset
@relation weather

@attribute outlook {sunny, overcast, rainy}
@attribute temperature numeric
@attribute humidity numeric
@attribute windy {true, false}

@data
sunny,85,85.5,false
overcast,83,86.0,true
% mid-data comment
rainy,70,96.2,false
"#
    .to_string()
}

/// ARFF file whose data rows disagree about field counts
pub fn create_ragged_arff() -> String {
    r#"@relation ragged
@attribute a numeric
@attribute b numeric
@attribute c numeric
@data
1,2,3
4,5
"#
    .to_string()
}

/// ARFF file with quoted attribute names and quoted text fields
pub fn create_quoted_arff() -> String {
    r#"@relation 'sensor readings'
@attribute 'sensor id' string
@attribute "reading" numeric
@data
"unit-1, front",4.5
"unit-2, rear",5.0
"#
    .to_string()
}
