// User-facing copy, in the dashboard's language (pt-BR).

pub const INVALID_DATE: &str = "Escolha uma data válida";
pub const INVALID_AMOUNT: &str = "Valor para transferencia deve ser maior que 0";

pub fn success(invoice_payment: bool) -> &'static str {
    if invoice_payment {
        "Pagamento realizado"
    } else {
        "Depósito realizado"
    }
}

pub fn failure(invoice_payment: bool) -> String {
    format!(
        "Ocorreu algum erro ao tentar realizar o {}",
        if invoice_payment { "pagamento" } else { "depósito" }
    )
}

pub fn heading(invoice_payment: bool) -> &'static str {
    if invoice_payment {
        "Realize o pagamento da sua fatura"
    } else {
        "Realize o seu depósito"
    }
}

pub fn submit_label(invoice_payment: bool) -> &'static str {
    if invoice_payment {
        "Pagar agora"
    } else {
        "Depositar agora"
    }
}

pub const DESCRIPTION_PLACEHOLDER: &str = "Descrição";
pub const AMOUNT_PLACEHOLDER: &str = "Valor do depósito";
pub const DATE_PLACEHOLDER: &str = "AAAA-MM-DD";
