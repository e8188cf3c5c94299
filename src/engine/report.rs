//! Console reports printed once exploration is over.

use std::io::{self, Write};

use crate::data_structures::chained_hash::ChainedHashTable;
use crate::data_structures::clue_bst::ClueBst;
use crate::engine::analysis::AnalysisReport;

/// Writes the collected clues in alphabetical order.
pub fn write_clues<W: Write>(out: &mut W, clues: &ClueBst) -> io::Result<()> {
    writeln!(out, "\n--- Pistas Coletadas (em ordem alfabética) ---")?;
    if clues.is_empty() {
        writeln!(out, "Nenhuma pista foi encontrada.")?;
    }
    for clue in clues {
        writeln!(out, "- {clue}")?;
    }
    writeln!(out, "------------------------------------------------")
}

/// Dumps every non-empty bucket of the suspect table, most recent entry first.
pub fn write_suspect_table<W: Write>(out: &mut W, table: &ChainedHashTable) -> io::Result<()> {
    writeln!(out, "\n--- Associações Pista -> Suspeito (Tabela Hash) ---")?;
    for (index, chain) in table.buckets() {
        let mut chain = chain.peekable();
        if chain.peek().is_none() {
            continue;
        }
        writeln!(out, "Índice {index}:")?;
        for (clue, suspect) in chain {
            writeln!(out, "  - Pista: '{clue}' -> Suspeito: '{suspect}'")?;
        }
    }
    writeln!(out, "---------------------------------------------------")
}

/// Writes the per-suspect tally and the verdict.
pub fn write_analysis<W: Write>(out: &mut W, report: &AnalysisReport) -> io::Result<()> {
    writeln!(out, "\n--- Análise de Suspeitos ---")?;
    for tally in &report.tallies {
        writeln!(out, "{}: {} menções", tally.suspect, tally.mentions)?;
    }

    if let Some(best) = &report.most_cited {
        writeln!(
            out,
            "\n>>> O SUSPEITO MAIS CITADO É: {} (com {} menções)",
            best.suspect, best.mentions
        )?;
    }
    writeln!(out, "----------------------------")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::analysis::analyze;

    fn render<F>(write: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut out = Vec::new();
        write(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_clues_in_alphabetical_order() {
        let mut clues = ClueBst::new();
        clues.insert("Pegadas na lama");
        clues.insert("Copo quebrado");
        clues.insert("Chave dourada com brasao");

        let output = render(|out| write_clues(out, &clues));
        let chave = output.find("- Chave dourada com brasao").unwrap();
        let copo = output.find("- Copo quebrado").unwrap();
        let pegadas = output.find("- Pegadas na lama").unwrap();
        assert!(chave < copo && copo < pegadas);
    }

    #[test]
    fn test_no_clues_message() {
        let output = render(|out| write_clues(out, &ClueBst::new()));
        assert!(output.contains("Nenhuma pista foi encontrada."));
    }

    #[test]
    fn test_suspect_table_skips_empty_buckets() {
        let table: ChainedHashTable = [
            ("Bilhete rasgado com data antiga", "Mordomo"),
            ("Diario com anotacoes estranhas", "Dona da Casa"),
        ]
        .into_iter()
        .collect();

        let output = render(|out| write_suspect_table(out, &table));
        assert_eq!(output.matches("Índice").count(), 1);
        assert!(output.contains(
            "Índice 7:\n  - Pista: 'Diario com anotacoes estranhas' -> Suspeito: 'Dona da Casa'\n  - Pista: 'Bilhete rasgado com data antiga' -> Suspeito: 'Mordomo'\n"
        ));
    }

    #[test]
    fn test_analysis_verdict() {
        let table: ChainedHashTable = [("Copo quebrado", "Mordomo")].into_iter().collect();
        let mut clues = ClueBst::new();
        clues.insert("Copo quebrado");
        let suspects = vec!["Jardineiro".to_string(), "Mordomo".to_string()];

        let report = analyze(&table, &clues, &suspects);
        let output = render(|out| write_analysis(out, &report));
        assert!(output.contains("Jardineiro: 0 menções\nMordomo: 1 menções\n"));
        assert!(output.contains(">>> O SUSPEITO MAIS CITADO É: Mordomo (com 1 menções)"));
    }
}
