pub const OVERVIEW_SYSTEM_PROMPT: &str = "You are a knowledgeable real estate expert.";

pub const DETAILS_SYSTEM_PROMPT: &str =
    "You are a real estate database. Respond with only the requested format.";

pub const SCHOOLS_SYSTEM_PROMPT: &str =
    "You are a school information database. List exactly 3 schools in the exact format specified.";

/// Free-text overview request.
pub fn build_overview_prompt(address: &str) -> String {
    format!(
        "Provide a brief overview of the property at {address}. \
         Include notable features and characteristics."
    )
}

/// Five labelled lines, one per `PropertyDetails` field.
pub fn build_details_prompt(address: &str) -> String {
    format!(
        "Provide detailed information about the property at {address} in the following format:\n\
         Square Feet: [number]\n\
         Bedrooms: [number]\n\
         Bathrooms: [number]\n\
         Estimated Value: [number in USD]\n\
         Year Built: [year]"
    )
}

/// Three blocks of four labelled lines, one block per school.
pub fn build_schools_prompt(address: &str) -> String {
    format!(
        "List 3 nearby schools for {address}. For each school, provide:\n\
         Name: [school name]\n\
         Distance: [number] miles\n\
         Rating: [number]/10\n\
         Type: [elementary school/middle school/high school]"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDRESS: &str = "123 Main St, Springfield, IL 62701";

    #[test]
    fn overview_prompt_embeds_address() {
        assert_eq!(
            build_overview_prompt(ADDRESS),
            "Provide a brief overview of the property at 123 Main St, Springfield, IL 62701. \
             Include notable features and characteristics."
        );
    }

    #[test]
    fn details_prompt_lists_all_five_labels() {
        let prompt = build_details_prompt(ADDRESS);
        assert!(prompt.contains(ADDRESS));
        for label in [
            "Square Feet:",
            "Bedrooms:",
            "Bathrooms:",
            "Estimated Value:",
            "Year Built:",
        ] {
            assert!(prompt.contains(label), "missing {label}");
        }
        assert_eq!(prompt.lines().count(), 6);
    }

    #[test]
    fn schools_prompt_asks_for_three_with_four_fields() {
        let prompt = build_schools_prompt(ADDRESS);
        assert!(prompt.starts_with("List 3 nearby schools for 123 Main St"));
        for label in ["Name:", "Distance:", "Rating:", "Type:"] {
            assert!(prompt.contains(label), "missing {label}");
        }
        assert!(prompt.contains("elementary school/middle school/high school"));
    }

    #[test]
    fn system_prompts_constrain_format() {
        assert!(DETAILS_SYSTEM_PROMPT.contains("only the requested format"));
        assert!(SCHOOLS_SYSTEM_PROMPT.contains("exactly 3 schools"));
    }
}
