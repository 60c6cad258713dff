pub fn gemini_response_fixture() -> &'static str {
    return r#"
{
  "candidates": [
    {
      "content": {
        "parts": [
          { "text": "Liquid staking through Lido keeps your ETH " },
          { "text": "usable in DeFi while it earns rewards." }
        ],
        "role": "model"
      },
      "finishReason": "STOP",
      "index": 0
    }
  ],
  "usageMetadata": {
    "promptTokenCount": 12,
    "candidatesTokenCount": 18,
    "totalTokenCount": 30
  },
  "modelVersion": "gemini-2.0-flash",
  "responseId": "resp-gemini-1"
}
"#
    .trim();
}

pub fn openrouter_response_fixture() -> &'static str {
    return r#"
{
  "id": "gen-123",
  "provider": "Chutes",
  "model": "deepseek/deepseek-r1-zero:free",
  "object": "chat.completion",
  "created": 1742000000,
  "choices": [
    {
      "logprobs": null,
      "finish_reason": "stop",
      "index": 0,
      "message": {
        "role": "assistant",
        "content": "Curve stable pools are the lowest risk option right now.",
        "refusal": null
      }
    }
  ],
  "usage": {
    "prompt_tokens": 14,
    "completion_tokens": 11,
    "total_tokens": 25
  }
}
"#
    .trim();
}

pub fn openrouter_error_fixture() -> &'static str {
    return r#"{"error":{"message":"No auth credentials found","code":401}}"#;
}
