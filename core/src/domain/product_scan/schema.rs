use serde_json::json;

/// Returns the JSON schema for product ingredient LLM responses
pub fn get_product_analysis_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "productName": {
                "type": "string",
                "description": "Name of the product or 'Unknown Product'"
            },
            "overallVerdict": {
                "type": "string",
                "description": "A summary of whether this product is generally good or bad for hair."
            },
            "ingredients": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "function": {
                            "type": "string",
                            "description": "e.g., Preservative, Emollient, Surfactant"
                        },
                        "suitability": {
                            "type": "string",
                            "enum": ["Good", "Caution", "Avoid", "Neutral"]
                        },
                        "description": {
                            "type": "string",
                            "description": "Brief explanation of effects."
                        }
                    },
                    "required": ["name", "function", "suitability", "description"]
                }
            }
        },
        "required": ["productName", "overallVerdict", "ingredients"]
    })
}
