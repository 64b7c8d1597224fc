pub mod programs {
    pub const JUPITER_V6: &str = "JUP6LkbZbjS1jKKwapdHNy74zcZ3tLUZoi5QNyVTaV4";
}

pub mod program_names {
    use super::programs;
    use once_cell::sync::Lazy;
    use std::collections::HashMap;

    static PROGRAM_NAME: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
        let mut map = HashMap::new();
        map.insert(programs::JUPITER_V6, "Jupiter V6");
        map
    });

    pub fn name(program_id: &str) -> &'static str {
        PROGRAM_NAME
            .get(program_id)
            .copied()
            .unwrap_or("Unknown program")
    }
}

/// Marker preceding encoded event payloads in transaction logs.
pub const PROGRAM_DATA_LOG: &str = "Program data: ";
