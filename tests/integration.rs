//! Integration tests for the wordstorm library API.
//!
//! These exercise the public modules together, the way an embedding
//! application would: read an export, extract, filter, count, render.

use std::fs;
use std::io::{Cursor, Write};

use wordstorm::config::{CloudConfig, ExtractConfig, Theme};
use wordstorm::core::filter::{FilterConfig, apply_filters};
use wordstorm::core::frequency::{WordCount, cloud_frequencies, word_frequencies};
use wordstorm::core::{extract_entries, extract_messages};
use wordstorm::format::{TableFormat, to_format_string, write_to_format};
use wordstorm::input::{lines_from_archive, read_input};
use wordstorm::pipeline::{PipelineConfig, run_pipeline};
use wordstorm::render::{Colormap, RenderParams, render_cloud};
use wordstorm::{ChatEntry, WordstormError};

const EXPORT: &str = "\
12/31/22, 11:58 PM - Messages and calls are end-to-end encrypted. No one outside of this chat can read them.
12/31/22, 11:59 PM - Alice: Happy new year everyone!!! 🎉🎉
1/1/23, 12:00 AM - Bob: happy new year 😄
1/1/23, 12:01 AM - Carol: Happy happy happy
1/1/23, 12:02 AM - Alice changed the subject to \"2023\"
1/1/23, 9:30 AM - Bob: breakfast anyone?";

fn lines() -> Vec<&'static str> {
    EXPORT.lines().collect()
}

// ============================================================================
// Worked examples
// ============================================================================

mod worked_examples {
    use super::*;

    #[test]
    fn test_emoji_stripped_and_trimmed() {
        let messages = extract_messages(
            ["3/14/23, 9:05 PM - Alice: good morning!! 😀"],
            &ExtractConfig::new(),
        );
        assert_eq!(messages, vec!["good morning!!".to_string()]);
    }

    #[test]
    fn test_notice_line_excluded() {
        let messages = extract_messages(
            ["End-to-end encrypted message notice line"],
            &ExtractConfig::new(),
        );
        assert!(messages.is_empty());
    }

    #[test]
    fn test_short_words_excluded_from_table() {
        let table = word_frequencies(&["hi hi hi hello".to_string()]);
        assert_eq!(table, vec![WordCount::new("hello", 1)]);
    }
}

// ============================================================================
// Extraction + counting
// ============================================================================

mod extraction {
    use super::*;

    #[test]
    fn test_export_extraction() {
        let messages = extract_messages(lines(), &ExtractConfig::new());
        assert_eq!(
            messages,
            vec![
                "Happy new year everyone!!!",
                "happy new year",
                "Happy happy happy",
                "breakfast anyone?",
            ]
        );
    }

    #[test]
    fn test_emojis_kept_on_request() {
        let messages = extract_messages(lines(), &ExtractConfig::new().with_emojis(true));
        assert_eq!(messages[0], "Happy new year everyone!!! 🎉🎉");
    }

    #[test]
    fn test_frequency_table_of_export() {
        let messages = extract_messages(lines(), &ExtractConfig::new());
        let table = word_frequencies(&messages);
        assert_eq!(
            table,
            vec![
                WordCount::new("happy", 5),
                WordCount::new("new", 2),
                WordCount::new("year", 2),
                WordCount::new("everyone", 1),
                WordCount::new("breakfast", 1),
                WordCount::new("anyone", 1),
            ]
        );
    }

    #[test]
    fn test_entries_carry_sender_and_time() {
        let entries = extract_entries(lines(), &ExtractConfig::new());
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[1].sender(), "Bob");
        let ts = entries[1].timestamp.unwrap();
        assert_eq!(ts.to_rfc3339(), "2023-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_filter_then_count() {
        let entries = extract_entries(lines(), &ExtractConfig::new());
        let config = FilterConfig::new().with_date_from("2023-01-01").unwrap();
        let bodies: Vec<String> = apply_filters(entries, &config)
            .into_iter()
            .map(ChatEntry::into_body)
            .collect();
        assert_eq!(bodies.len(), 3);
        assert_eq!(word_frequencies(&bodies)[0], WordCount::new("happy", 4));
    }

    #[test]
    fn test_cloud_frequencies_modes() {
        let messages = extract_messages(lines(), &ExtractConfig::new());

        let naive = cloud_frequencies(&messages, true);
        assert!(naive.contains(&WordCount::new("everyone!!!", 1)));

        let processed = cloud_frequencies(&messages, false);
        assert!(processed.contains(&WordCount::new("happy", 5)));
        assert!(processed.iter().all(|w| w.word != "everyone!!!"));
    }
}

// ============================================================================
// Input loading
// ============================================================================

mod input_loading {
    use super::*;

    #[test]
    fn test_read_txt_and_zip_agree() {
        let dir = tempfile::tempdir().unwrap();
        let txt = dir.path().join("chat.txt");
        fs::write(&txt, EXPORT).unwrap();

        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("WhatsApp Chat with Bob.txt", zip::write::SimpleFileOptions::default())
            .unwrap();
        writer.write_all(EXPORT.as_bytes()).unwrap();
        let zipped = writer.finish().unwrap().into_inner();
        let zip_path = dir.path().join("chat.zip");
        fs::write(&zip_path, &zipped).unwrap();

        let from_txt = read_input(&txt).unwrap();
        assert_eq!(from_txt, read_input(&zip_path).unwrap());
        assert_eq!(from_txt, lines_from_archive(Cursor::new(zipped)).unwrap());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = read_input("/no/such/export.txt").unwrap_err();
        assert!(err.is_io());
    }
}

// ============================================================================
// Rendering + pipeline
// ============================================================================

mod rendering {
    use super::*;

    #[test]
    fn test_pipeline_end_to_end() {
        let config = PipelineConfig::new()
            .with_cloud(CloudConfig::new().with_theme(Theme::Dark).with_seed(11));
        let report = run_pipeline(lines(), &config).unwrap();

        assert_eq!(report.messages.len(), 4);
        assert_eq!(report.table[0], WordCount::new("happy", 5));
        assert_eq!(report.stats.lines, 6);
        assert_eq!(report.cloud.dimensions(), (1000, 500));
        assert_eq!(report.cloud.image().get_pixel(0, 0).0, [0x1c, 0x1c, 0x1c]);
    }

    #[test]
    fn test_pipeline_is_deterministic() {
        let config = PipelineConfig::new().with_cloud(CloudConfig::new().with_seed(77));
        let first = run_pipeline(lines(), &config).unwrap();
        let second = run_pipeline(lines(), &config).unwrap();
        assert_eq!(first.table, second.table);
        assert_eq!(first.cloud.to_png().unwrap(), second.cloud.to_png().unwrap());
    }

    #[test]
    fn test_theme_colormaps() {
        let dark = RenderParams::from_config(&CloudConfig::new().with_theme(Theme::Dark));
        let light = RenderParams::from_config(&CloudConfig::new().with_theme(Theme::Light));
        assert_eq!(dark.colormap, Colormap::Viridis);
        assert_eq!(light.colormap, Colormap::Plasma);
    }

    #[test]
    fn test_word_colors_come_from_colormap() {
        let params = RenderParams::from_config(&CloudConfig::new().with_theme(Theme::Dark))
            .with_size(300, 150);
        let words = vec![WordCount::new("alpha", 3), WordCount::new("beta", 1)];
        let cloud = render_cloud(&words, &params).unwrap();

        for word in cloud.words() {
            assert_ne!(word.color, params.background);
            let (w, h) = word.size();
            let painted = (word.y..word.y + h)
                .flat_map(|y| (word.x..word.x + w).map(move |x| (x, y)))
                .filter(|&(x, y)| cloud.image().get_pixel(x, y).0 == word.color)
                .count();
            assert!(painted > 0, "{} left no pixels", word.word);
        }
    }

    #[test]
    fn test_save_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cloud.png");
        let params = RenderParams::default().with_size(200, 100);
        let cloud = render_cloud(&[WordCount::new("solo", 1)], &params).unwrap();

        cloud.save_png(&path).unwrap();
        assert_eq!(fs::read(&path).unwrap(), cloud.to_png().unwrap());
    }

    #[test]
    fn test_empty_cloud_error() {
        let err = render_cloud(&[], &RenderParams::default()).unwrap_err();
        assert!(matches!(err, WordstormError::EmptyCloud));
        assert!(err.is_user_warning());
    }
}

// ============================================================================
// Table output
// ============================================================================

mod table_output {
    use super::*;

    fn table() -> Vec<WordCount> {
        vec![WordCount::new("happy", 5), WordCount::new("year", 2)]
    }

    #[test]
    fn test_csv_string() {
        let csv = to_format_string(&table(), TableFormat::Csv).unwrap();
        assert_eq!(csv, "Word;Count\nhappy;5\nyear;2\n");
    }

    #[test]
    fn test_json_string() {
        let json = to_format_string(&table(), TableFormat::Json).unwrap();
        let parsed: Vec<WordCount> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, table());
    }

    #[test]
    fn test_text_string() {
        let text = to_format_string(&table(), TableFormat::Text).unwrap();
        let mut rows = text.lines();
        assert!(rows.next().unwrap().contains("Word"));
        assert!(rows.next().unwrap().contains("happy"));
    }

    #[test]
    fn test_write_csv_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.csv");
        write_to_format(&table(), &path, TableFormat::Csv).unwrap();

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .from_path(&path)
            .unwrap();
        let rows: Vec<(String, usize)> = reader.deserialize().map(Result::unwrap).collect();
        assert_eq!(rows, vec![("happy".to_string(), 5), ("year".to_string(), 2)]);
    }
}
