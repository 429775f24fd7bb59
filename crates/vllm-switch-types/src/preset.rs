/// A named bundle of server settings for one model.
///
/// Presets are compiled in and selected from the menu by `key`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelPreset {
    pub key: &'static str,
    pub name: &'static str,
    pub model_id: &'static str,
    pub description: &'static str,
    pub max_model_len: u32,
    pub gpu_memory_utilization: f64,
}

impl ModelPreset {
    /// GPU memory fraction as written to the environment file (`0.90`, not `0.9`).
    pub fn gpu_memory_utilization_value(&self) -> String {
        format!("{:.2}", self.gpu_memory_utilization)
    }

    pub fn max_model_len_value(&self) -> String {
        self.max_model_len.to_string()
    }
}

/// All selectable presets, in menu order.
pub const PRESETS: &[ModelPreset] = &[
    ModelPreset {
        key: "1",
        name: "Qwen2.5-7B-Instruct",
        model_id: "Qwen/Qwen2.5-7B-Instruct",
        description: "Original default model - Qwen 2.5 7B",
        max_model_len: 8192,
        gpu_memory_utilization: 0.95,
    },
    ModelPreset {
        key: "2",
        name: "Mistral-7B-Instruct-v0.3",
        model_id: "mistralai/Mistral-7B-Instruct-v0.3",
        description: "Mistral AI 7B Instruct v0.3",
        max_model_len: 4096,
        gpu_memory_utilization: 0.95,
    },
    ModelPreset {
        key: "3",
        name: "Mistral-7B-Instruct-v0.2",
        model_id: "mistralai/Mistral-7B-Instruct-v0.2",
        description: "Mistral AI 7B Instruct v0.2",
        max_model_len: 4096,
        gpu_memory_utilization: 0.95,
    },
    ModelPreset {
        key: "4",
        name: "Llama-3-8B-Instruct",
        model_id: "meta-llama/Meta-Llama-3-8B-Instruct",
        description: "Meta Llama 3 8B Instruct",
        max_model_len: 8192,
        gpu_memory_utilization: 0.90,
    },
    ModelPreset {
        key: "5",
        name: "Phi-3-Mini-Instruct",
        model_id: "microsoft/Phi-3-mini-4k-instruct",
        description: "Microsoft Phi-3 Mini 4K Instruct (lower VRAM)",
        max_model_len: 4096,
        gpu_memory_utilization: 0.85,
    },
];

/// Look up a preset by its menu key.
pub fn find_preset(key: &str) -> Option<&'static ModelPreset> {
    PRESETS.iter().find(|preset| preset.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_and_model_ids_are_unique() {
        let keys: HashSet<_> = PRESETS.iter().map(|p| p.key).collect();
        let ids: HashSet<_> = PRESETS.iter().map(|p| p.model_id).collect();
        assert_eq!(keys.len(), PRESETS.len());
        assert_eq!(ids.len(), PRESETS.len());
    }

    #[test]
    fn test_find_preset() {
        assert_eq!(find_preset("4").map(|p| p.name), Some("Llama-3-8B-Instruct"));
        assert!(find_preset("9").is_none());
        assert!(find_preset("").is_none());
    }

    #[test]
    fn test_gpu_fraction_keeps_two_decimals() {
        assert_eq!(find_preset("4").unwrap().gpu_memory_utilization_value(), "0.90");
        assert_eq!(find_preset("5").unwrap().gpu_memory_utilization_value(), "0.85");
        assert_eq!(find_preset("1").unwrap().gpu_memory_utilization_value(), "0.95");
    }
}
