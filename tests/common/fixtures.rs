//! Static alert-message corpora and alert documents used across harnesses.
//!
//! Each message corpus is a `&'static [&'static str]` of bodies in one of the
//! upstream generator formats. The expected extractions for the richer samples
//! live next to them so harnesses can assert field by field.

/// The two-section example every parser change is checked against.
pub const SECTIONS_ONLY: &str = "❌ Resumo do Erro
Falha ao conectar no serviço externo.
Timeout após 30s.
✅ Ação recomendada
Verificar se o serviço está disponível.";

/// Oldest generator format: emoji-prefixed Portuguese label lines.
pub const LEGACY_PT: &str = "🔴 Erro na Execução do Node \"HttpRequest\"
📄 Nome do Workflow: Não informado diretamente (ID da execução fornecido)
🧩 ID da Execução: 17914
📍 Link direto: https://n8n.example.host/workflow/60zc/executions/17914
🗓️ Horário: Não especificado";

/// Portuguese label lines followed by narrative sections.
pub const SECTIONED_PT: &str = "🛑 Erro no Workflow
📜 Nome do Workflow: Sincronização de Pedidos
🧩 Último nó executado: \"Buscar Pedidos\"
⚠️ Tipo de erro: NodeApiError
💬 Mensagem de erro: Request failed with status code 503
📍 Link direto: https://n8n.example.host/workflow/42/executions/9001
🧩 ID da Execução: 9001

❌ Resumo do Erro
O serviço de pedidos retornou 503.
Três tentativas falharam.

✅ Ação recomendada
Verificar o status do serviço de pedidos.

🕵️ Dica para o desenvolvedor
Adicionar retry com backoff no nó HTTP.";

/// English generator format, markdown emphasis on one heading.
pub const ENGLISH: &str = "⚠️ Workflow failure
Workflow name: Invoice Export
Failed node: 'Upload to S3'
Error type: TimeoutError
Error message: Connection timed out after 30000ms
Execution ID: 5521
Direct link: https://n8n.example.host/workflow/7/executions/5521
Possible cause: Bucket endpoint unreachable from the worker network
Suggestion: Check the VPC endpoint configuration

❌ Error Summary:
The upload step timed out.

✅ **Recommended action**
Retry once the endpoint is reachable.";

/// Dashboard generator format: receipt glyph, `Mensagem técnica`, and the
/// gendered detective heading (🕵 U+FE0F U+200D ♂ U+FE0F).
pub const DASHBOARD_PT: &str = "🛑 Falha no Workflow
🧾 Nome do Workflow: Conciliação Bancária
🧩 Último nó executado: \"Importar Extrato\"
⚠️ Tipo de erro: NodeOperationError
Mensagem técnica: [object Object]
📍 Link direto: https://n8n.example.host/workflow/88/executions/3107
🧩 ID da Execução: 3107

❌ Resumo do Erro
O extrato veio vazio.
🧾 Detalhes técnicos
stack trace omitido

✅ Ação recomendada
Reprocessar o extrato manualmente.

🕵\u{FE0F}\u{200D}♂\u{FE0F} Dica para Devs
Validar o payload antes do nó de importação.";

pub const CORPUS_STRUCTURED: &[&str] = &[SECTIONS_ONLY, LEGACY_PT, SECTIONED_PT, ENGLISH, DASHBOARD_PT];

/// Bodies from which nothing may be extracted.
pub const CORPUS_NOISE: &[&str] = &[
    "",
    "   \n\t  \n",
    "🔥🔥🔥",
    "✅",
    "❌\n✅\n🕵️",
    "Workflow crashed, please have a look",
    "ID da Execução: não informado",
    "Link: ftp://files.example.host/dump.tar",
    "Execution ID:\n12345",
];

// ---------------------------------------------------------------------------
// Alert documents
// ---------------------------------------------------------------------------

/// JSON array using the backend's snake_case column names.
pub const ALERTS_JSON_ARRAY: &str = r#"[
  {"id": "e1", "message": "Tipo de erro: TypeError", "workflow_name": "Billing", "status": "pendente",
   "priority": "Alta", "created_at": "2024-01-15T09:00:00Z"},
  {"id": "e2", "message": "Failing node: Webhook", "status": "resolvido",
   "created_at": "2024-01-15T11:00:00Z"},
  {"id": "e3", "errorType": "Explicit", "timestamp": "2024-01-14T08:30:00Z"}
]"#;

/// The same three alerts as JSON lines, with one malformed line in between.
pub const ALERTS_JSON_LINES_WITH_GARBAGE: &str = r#"{"id": "e1", "message": "Tipo de erro: TypeError", "workflow_name": "Billing", "created_at": "2024-01-15T09:00:00Z"}
this is not json
{"id": "e2", "message": "Failing node: Webhook", "created_at": "2024-01-15T11:00:00Z"}

{"id": "e3", "errorType": "Explicit", "timestamp": "2024-01-14T08:30:00Z"}
"#;
