pub const SCAN_INSTRUCTION: &str = "Analyze the ingredients list in this beauty product image. Identify the product name if visible. List the key ingredients found, explaining their function and suitability for hair health (Good, Caution, Avoid, Neutral). Provide an overall short verdict.";

pub const UNANALYZABLE_MESSAGE: &str =
    "Could not analyze image. Please try a clearer photo of the ingredients list.";
