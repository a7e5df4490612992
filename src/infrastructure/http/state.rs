//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    GenerateImageHandler, ResetConversationHandler, SendChatMessageHandler,
    SynthesizeSpeechHandler, TranscribeAudioHandler,
    // Query handlers
    ListVoicesHandler,
    // Ports
    ChatCompletionPort, ConversationStorePort, ImageGenerationPort, SpeechToTextPort,
    TtsEnginePort,
};

/// 外部 AI 服务
///
/// 每个字段对应一个出站端口，由 main 按配置选择具体实现
#[derive(Clone)]
pub struct AiProviders {
    pub chat: Arc<dyn ChatCompletionPort>,
    pub images: Arc<dyn ImageGenerationPort>,
    pub speech_to_text: Arc<dyn SpeechToTextPort>,
    /// 主服务 TTS
    pub primary_tts: Arc<dyn TtsEnginePort>,
    /// OpenAI 兼容 TTS
    pub openai_tts: Arc<dyn TtsEnginePort>,
}

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub conversation_store: Arc<dyn ConversationStorePort>,

    // ========== Command Handlers ==========
    pub send_chat_message_handler: SendChatMessageHandler,
    pub reset_conversation_handler: ResetConversationHandler,
    pub generate_image_handler: GenerateImageHandler,
    pub transcribe_audio_handler: TranscribeAudioHandler,
    pub synthesize_speech_handler: SynthesizeSpeechHandler,

    // ========== Query Handlers ==========
    pub list_voices_handler: ListVoicesHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(conversation_store: Arc<dyn ConversationStorePort>, providers: AiProviders) -> Self {
        Self {
            conversation_store: conversation_store.clone(),

            // Command handlers
            send_chat_message_handler: SendChatMessageHandler::new(
                conversation_store.clone(),
                providers.chat,
            ),
            reset_conversation_handler: ResetConversationHandler::new(conversation_store),
            generate_image_handler: GenerateImageHandler::new(providers.images),
            transcribe_audio_handler: TranscribeAudioHandler::new(providers.speech_to_text),
            synthesize_speech_handler: SynthesizeSpeechHandler::new(
                providers.primary_tts,
                providers.openai_tts,
            ),

            // Query handlers
            list_voices_handler: ListVoicesHandler::new(),
        }
    }
}
