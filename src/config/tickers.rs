/// The fixed ticker set the study covers: the names that dominated forum
/// discussion during the early-2021 retail trading wave, plus a couple of
/// large caps as a control group.
pub const TICKERS: &[&str] = &[
    // --- Meme names ---
    "GME", "AMC", "BB", "NOK", "BBBY", "PLTR",
    // --- Large caps ---
    "TSLA", "AAPL",
];
