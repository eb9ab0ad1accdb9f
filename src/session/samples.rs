//! Sample paragraphs for trying the analyzer without typing.

/// Fixed sample texts, loaded in rotation
pub const SAMPLE_TEXTS: [&str; 3] = [
    "The Eiffel Tower stands as a remarkable testament to the ingenuity and innovation of late 19th-century engineering. Commissioned for the 1889 World's Fair in Paris, this iconic structure was the brainchild of Gustave Eiffel, a visionary engineer renowned for his pioneering work in metal construction.",
    "Artificial intelligence has rapidly evolved over the past decade, transforming industries and daily life. Large language models like GPT-4 and Claude can generate human-like text, answer questions, and even write code. However, these capabilities raise important questions about authenticity, originality, and the future of human creativity.",
    "Climate change represents one of the most pressing challenges of our time. Rising global temperatures have led to more frequent extreme weather events, melting polar ice caps, and rising sea levels. Scientists argue that immediate action is necessary to mitigate these effects and prevent catastrophic consequences for future generations.",
];

/// Sample at `index`, wrapping around
pub fn sample(index: usize) -> &'static str {
    SAMPLE_TEXTS[index % SAMPLE_TEXTS.len()]
}
