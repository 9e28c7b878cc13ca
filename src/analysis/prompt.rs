/// Build the extraction prompt for one exam report.
///
/// The template is the whole contract with the model: the output structure,
/// the interpretation guidelines for the mammography domain (including the
/// nodule/cyst reclassification rule), and the strict JSON-only output
/// format. The report text is substituted at the single placeholder at the
/// end.
pub fn build_analysis_prompt(report_text: &str) -> String {
    format!(
        r#"Você é um especialista em análise de relatórios de mamografia. Sua tarefa é ler o relatório fornecido e extrair as informações solicitadas na estrutura abaixo. Siga ATENTAMENTE as "Diretrizes de Interpretação".

Estrutura de Saída:
Cisto:
- Presente ou Ausente
- Localização e/ou tamanho do cisto

Nódulo:
- Presente ou Ausente
- Localização e/ou tamanho do nódulo

Calcificação:
- Presente ou Ausente
- Localização e/ou tamanho da calcificação

Microcalcificação:
- Presente ou Ausente
- Localização e/ou tamanho da microcalcificação

BI-RADS: [valor]

Outras citações a avaliar: [observações adicionais relevantes]

Diretrizes de Interpretação:

1.  Identificação Geral de Achados:
    * Para cada categoria principal (Cisto, Nódulo, Calcificação, Microcalcificação), determine o Status (Presente ou Ausente) e, se presente, extraia a Localização e o Tamanho.
    * Se informações específicas não estiverem disponíveis no texto, utilize "[sem referência no texto]".

2.  Diferenciação e Reclassificação Nódulo/Cisto:
    * Definições Básicas: Nódulos são estruturas predominantemente sólidas; cistos são estruturas predominantemente líquidas.
    * Reclassificação de Nódulo Mamográfico para Cisto Ecográfico:
        * Condição de Aplicabilidade: Esta sub-regra de reclassificação aplica-se exclusivamente quando o relatório atual indica que achados de uma MAMOGRAFIA foram subsequentemente (ou conjuntamente) avaliados por ECOGRAFIA (Ultrassonografia) e esta ecografia está esclarecendo a natureza de um achado mamográfico. A simples menção de ambos os exames no histórico não ativa esta regra se não houver uma reclassificação explícita de um achado específico.
        * Ação de Reclassificação: Se, e somente se, a condição acima for atendida, e um achado inicialmente descrito como "nódulo" na mamografia for claramente identificado e reclassificado pela ecografia como "cisto" (ex: "cisto simples", "achado mamográfico corresponde a cisto ao ultrassom", "natureza cística confirmada pela ecografia"), então, para essa lesão específica:
            * Cisto: Status (Presente), com os detalhes fornecidos (idealmente da ecografia).
            * Nódulo: Status (Ausente).
        * Quando NÃO há Reclassificação (Nódulo permanece Nódulo, Cisto permanece Cisto):
            * Se a ecografia confirmar um achado mamográfico como um nódulo sólido (ex: "nódulo sólido correspondente ao achado mamográfico").
            * Se o relatório for apenas de mamografia (sem ecografia complementar descrita para o achado) ou apenas de ecografia (sem referência a um achado mamográfico sendo reclassificado).
            * Se o achado for descrito como um complexo sólido-cístico (ver abaixo).
    * Complexos Sólido-Císticos: Se uma lesão for descrita como tendo componentes tanto sólidos quanto císticos (ex: "nódulo complexo", "cisto com componente sólido", "lesão sólido-cística"), ela deve ser reportada como PRESENTE para AMBAS as categorias: Cisto E Nódulo, com as respectivas descrições e tamanhos, se disponíveis.
    * Nódulos e Cistos como Achados Distintos e Múltiplos: Se o relatório descrever um nódulo e um cisto como duas (ou mais) lesões separadas e distintas (não uma reclassificação de uma única lesão), ambos devem ser extraídos individualmente com status "Presente" e seus respectivos detalhes.
    * Detalhamento: Sempre descreva o tipo do cisto ou/e nódulo, caso presente no relatório.


3.  Múltiplos Achados do Mesmo Tipo:
    * Quando houver múltiplos cistos ou múltiplos nódulos, reporte TODOS, priorizando: a) Achados classificados como suspeitos pelo relatório, b) Achados de maior tamanho, c) Achados com características atípicas mencionadas. Liste suas localizações e tamanhos.

4.  Diferenciação entre Calcificações e Microcalcificações:
    * Calcificações: estruturas maiores, geralmente descritas como "grosseiras", "distróficas", "vasculares".
    * Microcalcificações: estruturas menores, frequentemente descritas como "puntiformes", "pleomórficas", "lineares", "agrupadas", "em cluster".
    * Se o relatório mencionar "microcalcificações" especificamente, classifique como microcalcificações. Se mencionar apenas "calcificações" (e a descrição não sugerir microcalcificações), classifique como calcificações.

IMPORTANTE: Retorne a resposta APENAS em formato JSON válido, seguindo exatamente esta estrutura:

{{
    "cisto": {{
        "presente": true/false,
        "detalhes": "localização e/ou tamanho"
    }},
    "nodulo": {{
        "presente": true/false,
        "detalhes": "localização e/ou tamanho"
    }},
    "calcificacao": {{
        "presente": true/false,
        "detalhes": "localização e/ou tamanho"
    }},
    "microcalcificacao": {{
        "presente": true/false,
        "detalhes": "localização e/ou tamanho"
    }},
    "bi_rads": "valor",
    "outras_citacoes": "observações adicionais relevantes"
}}

RELATÓRIO DO EXAME:
{report_text}
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_contains_report_text() {
        let prompt = build_analysis_prompt("Nódulo no QSE da mama direita, 12mm.");
        assert!(prompt.contains("Nódulo no QSE da mama direita, 12mm."));
        assert!(prompt.ends_with("Nódulo no QSE da mama direita, 12mm.\n"));
    }

    #[test]
    fn prompt_lists_all_four_categories() {
        let prompt = build_analysis_prompt("texto");
        for key in ["\"cisto\"", "\"nodulo\"", "\"calcificacao\"", "\"microcalcificacao\""] {
            assert!(prompt.contains(key), "missing JSON key {key}");
        }
    }

    #[test]
    fn prompt_carries_reclassification_rule() {
        let prompt = build_analysis_prompt("texto");
        assert!(prompt.contains("Reclassificação de Nódulo Mamográfico para Cisto Ecográfico"));
        assert!(prompt.contains("ECOGRAFIA"));
        assert!(prompt.contains("Complexos Sólido-Císticos"));
    }

    #[test]
    fn prompt_carries_calcification_differentiation() {
        let prompt = build_analysis_prompt("texto");
        assert!(prompt.contains("puntiformes"));
        assert!(prompt.contains("grosseiras"));
    }

    #[test]
    fn prompt_demands_json_only_output() {
        let prompt = build_analysis_prompt("texto");
        assert!(prompt.contains("APENAS em formato JSON válido"));
        assert!(prompt.contains("\"bi_rads\": \"valor\""));
        assert!(prompt.contains("\"outras_citacoes\""));
    }

    #[test]
    fn prompt_mandates_no_reference_placeholder() {
        let prompt = build_analysis_prompt("texto");
        assert!(prompt.contains("[sem referência no texto]"));
    }
}
