/// UI widgets for the browser window
pub mod grid;
