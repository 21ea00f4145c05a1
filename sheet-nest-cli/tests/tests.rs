#[cfg(test)]
mod tests {
    use std::fs::File;
    use std::io::BufReader;
    use std::path::Path;
    use std::time::Duration;

    use float_cmp::approx_eq;
    use test_case::test_case;

    use sheet_nest::io::svg::result_to_svg;
    use sheet_nest::util::{RotationPolicy, assertions};
    use sheet_nest_cli::config::{NestCliConfig, SheetChoice};
    use sheet_nest_cli::io;
    use sheet_nest_cli::io::output::NestOutput;
    use sheet_nest_cli::nest_instance;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn config_with(sheet: SheetChoice) -> NestCliConfig {
        NestCliConfig {
            sheet,
            ..NestCliConfig::default()
        }
    }

    #[test_case("../assets/cabinet.json", SheetChoice::Instance; "cabinet on instance sheet")]
    #[test_case("../assets/cabinet.json", SheetChoice::Catalog { index: 2 }; "cabinet on 3000")]
    #[test_case("../assets/cabinet.json", SheetChoice::BestFit; "cabinet best fit")]
    #[test_case("../assets/shelving.json", SheetChoice::Instance; "shelving on instance sheet")]
    #[test_case("../assets/shelving.json", SheetChoice::BestFit; "shelving best fit")]
    fn test_instance(instance_path: &str, sheet: SheetChoice) {
        init_logger();
        let config = config_with(sheet);
        let ext_instance = io::read_instance(Path::new(instance_path)).unwrap();
        let instance = sheet_nest::io::import(&ext_instance).unwrap();

        let layout = nest_instance(&instance, &config).unwrap();
        let result = &layout.result;
        assert!(assertions::result_is_valid(result, &instance.parts, layout.bin));

        //write both output files and read the json back
        let dir = tempfile::tempdir().unwrap();
        let output = NestOutput {
            solution: sheet_nest::io::export(result, &instance.parts, Duration::ZERO).unwrap(),
            instance: ext_instance,
            sheet: layout.sheet_name.clone(),
            config,
        };
        let json_path = dir.path().join("sol.json");
        io::write_json(&output, &json_path).unwrap();
        let svg = result_to_svg(result, layout.bin, config.svg_draw_options, &layout.sheet_name);
        io::write_svg(&svg, &dir.path().join("sol.svg")).unwrap();

        let reader = BufReader::new(File::open(&json_path).unwrap());
        let read_back: NestOutput = serde_json::from_reader(reader).unwrap();
        let solution = &read_back.solution;
        assert_eq!(read_back.config, config);
        assert_eq!(solution.placed.len(), result.n_placed());
        assert_eq!(solution.placed.len() + solution.unplaced.len(), instance.parts.len());
        let used_area = solution.placed.iter().map(|p| p.width * p.height).sum::<f64>();
        assert!(approx_eq!(f64, used_area, solution.used_area, epsilon = 1e-6));
        assert!(approx_eq!(
            f64,
            solution.efficiency,
            100.0 * used_area / solution.total_area,
            epsilon = 1e-6
        ));
    }

    #[test]
    fn catalog_sheet_is_used() {
        let ext_instance = io::read_instance(Path::new("../assets/cabinet.json")).unwrap();
        let instance = sheet_nest::io::import(&ext_instance).unwrap();
        let layout = nest_instance(&instance, &config_with(SheetChoice::Catalog { index: 1 })).unwrap();

        assert_eq!(layout.sheet_name, "2500 x 1250");
        assert_eq!((layout.bin.width, layout.bin.height), (2500.0, 1250.0));
        assert!(nest_instance(&instance, &config_with(SheetChoice::Catalog { index: 9 })).is_err());
    }

    #[test]
    fn oversized_parts_stay_unplaced_on_small_sheet() {
        init_logger();
        let ext_instance = io::read_instance(Path::new("../assets/shelving.json")).unwrap();
        let instance = sheet_nest::io::import(&ext_instance).unwrap();
        let layout = nest_instance(&instance, &config_with(SheetChoice::Instance)).unwrap();

        //the four uprights are the first parts and longer than the sheet in both orientations
        assert_eq!(&layout.result.unplaced[..4], &[0, 1, 2, 3]);
        assert!(!layout.result.all_placed());
    }

    #[test]
    fn config_file_is_parsed() {
        let reader = BufReader::new(File::open("../assets/config.json").unwrap());
        let config: NestCliConfig = serde_json::from_reader(reader).unwrap();

        assert_eq!(config.nesting.rotation, RotationPolicy::Both);
        assert_eq!(config.sheet, SheetChoice::BestFit);
        assert!(config.svg_draw_options.draw_labels);
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config: NestCliConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, NestCliConfig::default());
        assert_eq!(config.sheet, SheetChoice::Instance);
    }

    #[test]
    fn missing_instance_file_is_an_error() {
        let err = io::read_instance(Path::new("../assets/does_not_exist.json")).unwrap_err();
        assert!(err.to_string().contains("could not open instance file"));
    }
}
