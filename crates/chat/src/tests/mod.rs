mod sitzung_tests;
mod verlauf_tests;
