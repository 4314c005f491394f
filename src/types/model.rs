//! Model identifiers accepted by query and text generation.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// A chat model identifier.
///
/// The associated constants cover the models the platform advertises;
/// [`ChatModel::custom`] passes any other identifier through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatModel(Cow<'static, str>);

impl ChatModel {
    pub const CHATGPT_4O_LATEST: ChatModel = ChatModel::known("chatgpt-4o-latest");
    pub const CLAUDE_3_5_HAIKU_20241022: ChatModel = ChatModel::known("claude-3-5-haiku-20241022");
    pub const CLAUDE_3_5_SONNET_20240620: ChatModel =
        ChatModel::known("claude-3-5-sonnet-20240620");
    pub const CLAUDE_3_5_SONNET_20241022: ChatModel =
        ChatModel::known("claude-3-5-sonnet-20241022");
    pub const CLAUDE_3_7_SONNET_20250219: ChatModel =
        ChatModel::known("claude-3-7-sonnet-20250219");
    pub const CLAUDE_3_HAIKU_20240307: ChatModel = ChatModel::known("claude-3-haiku-20240307");
    pub const CLAUDE_3_OPUS_20240229: ChatModel = ChatModel::known("claude-3-opus-20240229");
    pub const CLAUDE_3_SONNET_20240229: ChatModel = ChatModel::known("claude-3-sonnet-20240229");
    pub const DEEPSEEK_R1_DISTILL_LLAMA_70B: ChatModel =
        ChatModel::known("deepseek-r1-distill-llama-70b");
    pub const GPT_3_5_TURBO: ChatModel = ChatModel::known("gpt-3.5-turbo");
    pub const GPT_4: ChatModel = ChatModel::known("gpt-4");
    pub const GPT_4_TURBO: ChatModel = ChatModel::known("gpt-4-turbo");
    pub const GPT_4_TURBO_PREVIEW: ChatModel = ChatModel::known("gpt-4-turbo-preview");
    pub const GPT_4_5_PREVIEW: ChatModel = ChatModel::known("gpt-4.5-preview");
    pub const GPT_4O: ChatModel = ChatModel::known("gpt-4o");
    pub const GPT_4O_MINI: ChatModel = ChatModel::known("gpt-4o-mini");
    pub const LLAMA_3_1_8B: ChatModel = ChatModel::known("llama-3.1-8b");
    pub const LLAMA_3_1_8B_INSTANT: ChatModel = ChatModel::known("llama-3.1-8b-instant");
    pub const LLAMA_3_2_1B_PREVIEW: ChatModel = ChatModel::known("llama-3.2-1b-preview");
    pub const LLAMA_3_2_3B_PREVIEW: ChatModel = ChatModel::known("llama-3.2-3b-preview");
    pub const LLAMA_3_2_11B_VISION_PREVIEW: ChatModel =
        ChatModel::known("llama-3.2-11b-vision-preview");
    pub const LLAMA_3_2_90B_VISION_PREVIEW: ChatModel =
        ChatModel::known("llama-3.2-90b-vision-preview");
    pub const LLAMA_3_3_70B: ChatModel = ChatModel::known("llama-3.3-70b");
    pub const LLAMA_3_3_70B_SPECDEC: ChatModel = ChatModel::known("llama-3.3-70b-specdec");
    pub const LLAMA_3_3_70B_VERSATILE: ChatModel = ChatModel::known("llama-3.3-70b-versatile");
    pub const LLAMA3_70B_8192: ChatModel = ChatModel::known("llama3-70b-8192");
    pub const LLAMA3_8B_8192: ChatModel = ChatModel::known("llama3-8b-8192");
    pub const LLAMA_GUARD_3_8B: ChatModel = ChatModel::known("llama-guard-3-8b");
    pub const MIXTRAL_8X7B_32768: ChatModel = ChatModel::known("mixtral-8x7b-32768");
    pub const O1: ChatModel = ChatModel::known("o1");
    pub const O1_MINI: ChatModel = ChatModel::known("o1-mini");
    pub const O1_PREVIEW: ChatModel = ChatModel::known("o1-preview");
    pub const O3_MINI: ChatModel = ChatModel::known("o3-mini");
    pub const QWEN_2_5_32B: ChatModel = ChatModel::known("qwen-2.5-32b");
    pub const QWEN_2_5_CODER_32B: ChatModel = ChatModel::known("qwen-2.5-coder-32b");

    const fn known(id: &'static str) -> Self {
        ChatModel(Cow::Borrowed(id))
    }

    pub fn custom(id: impl Into<String>) -> Self {
        ChatModel(Cow::Owned(id.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChatModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ChatModel {
    fn from(id: &str) -> Self {
        ChatModel::custom(id)
    }
}

impl From<String> for ChatModel {
    fn from(id: String) -> Self {
        ChatModel::custom(id)
    }
}
