mod common;
use common::*;
use menus::mach::{
    CommandTable, OpenError, Outcome, Principal, Session, SessionState, TerminalCaps,
    DEFAULT_PROMPT,
};
use menus::rec::{ForceHelp, ItemFlags, LoggingMode, MenuHeader, MenuItem, NumbersMode};

fn run_main(root: &MenuRoot, host: &mut ScriptedHost) -> Outcome {
    let config = root.config();
    let mut session = Session::new(&config, root.set_dir("wwiv"), "main");
    session.open(host).unwrap();
    let outcome = session.run(host);
    session.close();
    outcome
}

#[test]
fn test_return_from_menu_runs_exit_script_once() {
    let root = MenuRoot::new();
    let header = MenuHeader {
        min_sl: 10,
        exit_script: "SayGoodbye".to_string(),
        ..MenuHeader::default()
    };
    root.menu("wwiv", "main", &header, &[item("Q", "ReturnFromMenu")]);
    let mut host = ScriptedHost::new(&["Q", "Q"]);
    let config = root.config();
    let mut session = Session::new(&config, root.set_dir("wwiv"), "main");
    session.open(&mut host).unwrap();
    assert_eq!(session.state(), SessionState::Open);
    assert_eq!(session.run(&mut host), Outcome::Finished);
    assert_eq!(session.state(), SessionState::Finished { reload: false });
    assert_eq!(host.external_names(), vec!["SayGoodbye"]);
    assert_eq!(host.reads, 1);
    assert_eq!(host.prompts_shown(DEFAULT_PROMPT), 1);
    assert!(!host.hangup);
    session.close();
    assert_eq!(session.state(), SessionState::Closed);
}

#[test]
fn test_exit_script_cannot_return_again() {
    let root = MenuRoot::new();
    let header = MenuHeader {
        exit_script: "ReturnFromMenu~Bye".to_string(),
        ..MenuHeader::default()
    };
    root.menu("wwiv", "main", &header, &[item("Q", "ReturnFromMenu")]);
    let mut host = ScriptedHost::new(&["Q"]);
    assert_eq!(run_main(&root, &mut host), Outcome::Finished);
    assert_eq!(host.external_names(), vec!["Bye"]);
}

#[test]
fn test_header_security_denies_open() {
    let root = MenuRoot::new();
    let header = MenuHeader {
        min_sl: 20,
        ..MenuHeader::default()
    };
    root.menu("wwiv", "main", &header, &[]);
    let mut host = ScriptedHost::new(&[]);
    let config = root.config();
    let mut session = Session::new(&config, root.set_dir("wwiv"), "main");
    match session.open(&mut host) {
        Err(OpenError::AccessDenied(name)) => assert_eq!(name, "main"),
        other => panic!("unexpected {:?}", other),
    }
    assert_eq!(host.logged, vec!["*MENU* : < Menu Sec".to_string()]);
    assert_eq!(session.state(), SessionState::Closed);
}

#[test]
fn test_missing_menu_reports_unable_to_open() {
    let root = MenuRoot::new();
    let mut host = ScriptedHost::new(&[]);
    let config = root.config();
    let mut session = Session::new(&config, root.set_dir("wwiv"), "nowhere");
    assert!(matches!(session.open(&mut host), Err(OpenError::Io { .. })));
    assert!(host.logged_containing("Unable to open Menu"));
}

#[test]
fn test_truncated_menu_is_a_decode_error() {
    let root = MenuRoot::new();
    root.file("wwiv", "main.mnu", "WWIV430");
    let mut host = ScriptedHost::new(&[]);
    let config = root.config();
    let mut session = Session::new(&config, root.set_dir("wwiv"), "main");
    assert!(matches!(session.open(&mut host), Err(OpenError::Decode { .. })));
}

#[test]
fn test_numeric_shortcut_wins_over_literal_key() {
    let root = MenuRoot::new();
    let header = MenuHeader {
        numbers_mode: NumbersMode::SetSubNumber,
        ..MenuHeader::default()
    };
    root.menu("wwiv", "main", &header, &[item("42", "Literal")]);
    let mut host = ScriptedHost::new(&["42", "007"]);
    assert_eq!(run_main(&root, &mut host), Outcome::Hangup);
    assert_eq!(
        host.externals,
        vec![
            ("SetSubNumber".to_string(), "42".to_string(), String::new()),
            ("SetSubNumber".to_string(), "7".to_string(), String::new()),
        ]
    );
}

#[test]
fn test_dir_numbers() {
    let root = MenuRoot::new();
    let header = MenuHeader {
        numbers_mode: NumbersMode::SetDirNumber,
        ..MenuHeader::default()
    };
    root.menu("wwiv", "main", &header, &[item("Q", "ReturnFromMenu")]);
    let mut host = ScriptedHost::new(&["3", "Q"]);
    assert_eq!(run_main(&root, &mut host), Outcome::Finished);
    assert_eq!(host.externals[0].0, "SetDirNumber");
    assert_eq!(host.externals[0].1, "3");
}

#[test]
fn test_deleted_items_never_match() {
    let root = MenuRoot::new();
    let header = MenuHeader {
        logging_mode: LoggingMode::Key,
        ..MenuHeader::default()
    };
    let deleted = MenuItem {
        flags: ItemFlags::DELETED,
        ..item("D", "Gone")
    };
    root.menu("wwiv", "main", &header, &[deleted, item("Q", "ReturnFromMenu")]);
    let mut host = ScriptedHost::new(&["d", "q"]);
    assert_eq!(run_main(&root, &mut host), Outcome::Finished);
    assert!(host.externals.is_empty());
    assert_eq!(host.logged, vec!["d".to_string(), "q".to_string()]);
}

#[test]
fn test_item_security_is_logged() {
    let root = MenuRoot::new();
    let guarded = MenuItem {
        min_sl: 100,
        ..item("S", "SysopStuff")
    };
    root.menu("wwiv", "main", &MenuHeader::default(), &[guarded]);
    let mut host = ScriptedHost::new(&["S"]);
    assert_eq!(run_main(&root, &mut host), Outcome::Hangup);
    assert!(host.externals.is_empty());
    assert_eq!(host.logged, vec!["*MENU* : < item security : S".to_string()]);
}

#[test]
fn test_item_password_for_remote_caller() {
    let root = MenuRoot::new();
    let locked = MenuItem {
        password: "*SYSTEM".to_string(),
        ..item("P", "Private")
    };
    root.menu("wwiv", "main", &MenuHeader::default(), &[locked]);
    let mut config = root.config();
    config.system_password = "sesame".to_string();
    let mut host = ScriptedHost::new(&["P", "P"]);
    host.principal.is_remote = true;
    host.passwords = vec!["nope".to_string(), "SESAME".to_string()].into();
    let mut session = Session::new(&config, root.set_dir("wwiv"), "main");
    session.open(&mut host).unwrap();
    assert_eq!(session.run(&mut host), Outcome::Hangup);
    assert_eq!(host.password_prompts, 2);
    assert_eq!(host.external_names(), vec!["Private"]);
}

#[test]
fn test_shared_keys_all_run_in_order() {
    let root = MenuRoot::new();
    root.menu(
        "wwiv",
        "main",
        &MenuHeader::default(),
        &[item("X", "First"), item("Y", "Other"), item("x", "Second")],
    );
    let mut host = ScriptedHost::new(&["X"]);
    run_main(&root, &mut host);
    assert_eq!(host.external_names(), vec!["First", "Second"]);
}

#[test]
fn test_finished_session_skips_remaining_records() {
    let root = MenuRoot::new();
    root.menu(
        "wwiv",
        "main",
        &MenuHeader::default(),
        &[item("X", "ReturnFromMenu~StillRuns"), item("X", "Skipped")],
    );
    let mut host = ScriptedHost::new(&["X"]);
    assert_eq!(run_main(&root, &mut host), Outcome::Finished);
    assert_eq!(host.external_names(), vec!["StillRuns"]);
}

#[test]
fn test_logging_modes() {
    let root = MenuRoot::new();
    let described = MenuItem {
        menu_text: "Read your mail".to_string(),
        ..item("R", "ReadEMail")
    };
    for (mode, expected) in &[
        (LoggingMode::None, vec![]),
        (LoggingMode::Key, vec!["r", "zz"]),
        (LoggingMode::Command, vec!["ReadEMail", "zz"]),
        (LoggingMode::Description, vec!["Read your mail", "zz"]),
    ] {
        let header = MenuHeader {
            logging_mode: *mode,
            ..MenuHeader::default()
        };
        root.menu("wwiv", "main", &header, &[described.clone()]);
        let mut host = ScriptedHost::new(&["r", "zz"]);
        run_main(&root, &mut host);
        assert_eq!(&host.logged, expected);
    }
}

#[test]
fn test_submenu_runs_to_completion() {
    let root = MenuRoot::new();
    root.menu(
        "wwiv",
        "main",
        &MenuHeader::default(),
        &[item("F", "MENU files"), item("Q", "ReturnFromMenu")],
    );
    let files = MenuHeader {
        entry_script: "EnterFiles".to_string(),
        exit_script: "LeaveFiles".to_string(),
        ..MenuHeader::default()
    };
    root.menu("wwiv", "files", &files, &[item("Q", "ReturnFromMenu")]);
    let mut host = ScriptedHost::new(&["F", "Q", "Q"]);
    assert_eq!(run_main(&root, &mut host), Outcome::Finished);
    assert_eq!(host.external_names(), vec!["EnterFiles", "LeaveFiles"]);
    assert_eq!(host.reads, 3);
}

#[test]
fn test_missing_submenu_keeps_parent_running() {
    let root = MenuRoot::new();
    root.menu(
        "wwiv",
        "main",
        &MenuHeader::default(),
        &[item("F", "MENU(\"nothere\", \"\")~AfterMenu"), item("Q", "ReturnFromMenu")],
    );
    let mut host = ScriptedHost::new(&["F", "Q"]);
    assert_eq!(run_main(&root, &mut host), Outcome::Finished);
    assert_eq!(host.external_names(), vec!["AfterMenu"]);
    assert!(host.logged_containing("Unable to open Menu"));
}

#[test]
fn test_missing_main_submenu_hangs_up() {
    let root = MenuRoot::new();
    root.menu(
        "wwiv",
        "files",
        &MenuHeader::default(),
        &[item("M", "MENU MAIN~AfterMain")],
    );
    let config = root.config();
    let mut host = ScriptedHost::new(&["M", "M"]);
    let mut session = Session::new(&config, root.set_dir("wwiv"), "files");
    session.open(&mut host).unwrap();
    assert_eq!(session.run(&mut host), Outcome::Hangup);
    assert!(host.hangup);
    assert!(host.externals.is_empty());
    assert_eq!(host.reads, 1);
}

#[test]
fn test_nesting_depth_is_bounded() {
    let root = MenuRoot::new();
    let header = MenuHeader {
        entry_script: "MENU loop".to_string(),
        ..MenuHeader::default()
    };
    root.menu("wwiv", "loop", &header, &[]);
    let mut config = root.config();
    config.max_depth = 3;
    let mut host = ScriptedHost::new(&[]);
    let mut session = Session::new(&config, root.set_dir("wwiv"), "loop");
    session.open(&mut host).unwrap();
    assert_eq!(session.run(&mut host), Outcome::Hangup);
    assert!(host.logged_containing("Menus nested too deep : loop"));
    assert_eq!(host.reads, 1);
}

#[test]
fn test_reload_propagates_to_parent() {
    let root = MenuRoot::new();
    root.menu("wwiv", "main", &MenuHeader::default(), &[item("F", "MENU files~AfterSubmenu")]);
    root.menu("wwiv", "files", &MenuHeader::default(), &[item("C", "ChangeSet")]);
    let mut host = ScriptedHost::new(&["F", "C", "never read"]);
    host.reload_on = vec!["ChangeSet".to_string()];
    assert_eq!(run_main(&root, &mut host), Outcome::Reload);
    assert_eq!(host.reads, 2);
    // the rest of the script still runs after the submenu unwinds
    assert_eq!(host.external_names(), vec!["ChangeSet", "AfterSubmenu"]);
}

#[test]
fn test_hangup_stops_the_script() {
    let root = MenuRoot::new();
    root.menu("wwiv", "main", &MenuHeader::default(), &[item("G", "Logoff~Pause")]);
    let mut host = ScriptedHost::new(&["G", "G"]);
    assert_eq!(run_main(&root, &mut host), Outcome::Hangup);
    assert_eq!(host.external_names(), vec!["Logoff"]);
    assert_eq!(host.reads, 1);
}

#[test]
fn test_prompt_file_and_generated_menu() {
    let root = MenuRoot::new();
    let described = MenuItem {
        menu_text: "Goodbye".to_string(),
        ..item("G", "Logoff")
    };
    root.menu("wwiv", "main", &MenuHeader::default(), &[described]);
    root.file("wwiv", "main.pro", "Main: .end.notes");
    let mut host = ScriptedHost::new(&[]);
    run_main(&root, &mut host);
    assert_eq!(host.displayed.len(), 2);
    assert!(host.displayed[0].contains("[G]       Goodbye"));
    assert_eq!(host.displayed[1], "Main: ");
}

#[test]
fn test_help_file_by_terminal() {
    let root = MenuRoot::new();
    let header = MenuHeader {
        force_help: ForceHelp::Force,
        ..MenuHeader::default()
    };
    root.menu("wwiv", "main", &header, &[]);
    root.file("wwiv", "main.ans", "ansi art");
    root.file("wwiv", "main.msg", "plain");
    let mut host = ScriptedHost::new(&[]);
    host.expert = true;
    host.caps = TerminalCaps {
        ansi: true,
        color: true,
    };
    run_main(&root, &mut host);
    assert_eq!(host.printed, vec![root.set_dir("wwiv").join("main.ans")]);

    let mut host = ScriptedHost::new(&[]);
    run_main(&root, &mut host);
    assert_eq!(host.printed, vec![root.set_dir("wwiv").join("main.msg")]);
}

#[test]
fn test_experts_see_help_on_entrance_only() {
    let root = MenuRoot::new();
    let header = MenuHeader {
        force_help: ForceHelp::OnEntrance,
        ..MenuHeader::default()
    };
    root.menu("wwiv", "main", &header, &[item("?", "DisplayHelp")]);
    root.file("wwiv", "main.msg", "help");
    let mut host = ScriptedHost::new(&["x", "?", "y"]);
    host.expert = true;
    run_main(&root, &mut host);
    assert_eq!(host.printed.len(), 2);
    assert_eq!(host.prompts_shown(DEFAULT_PROMPT), 4);
}

#[test]
fn test_display_help_ignored_for_novices() {
    let root = MenuRoot::new();
    root.menu("wwiv", "main", &MenuHeader::default(), &[item("?", "DisplayHelp")]);
    root.file("wwiv", "main.msg", "help");
    let mut host = ScriptedHost::new(&["?"]);
    run_main(&root, &mut host);
    // once per prompt, none for the command
    assert_eq!(host.printed.len(), 2);
}

#[test]
fn test_unrecognized_command_with_table() {
    let root = MenuRoot::new();
    root.menu(
        "wwiv",
        "main",
        &MenuHeader::default(),
        &[item("B", "Bogus~Pause")],
    );
    let mut config = root.config();
    config.commands = Some(CommandTable::from_names(&["Pause"]));
    let mut host = ScriptedHost::new(&["B"]);
    let mut session = Session::new(&config, root.set_dir("wwiv"), "main");
    session.open(&mut host).unwrap();
    session.run(&mut host);
    assert_eq!(host.external_names(), vec!["Pause"]);
    assert_eq!(
        host.logged,
        vec![
            "*MENU* : The following command was not recognized".to_string(),
            "*MENU* : Bogus".to_string(),
        ]
    );
}

#[test]
fn test_syntax_diagnostics_are_logged() {
    let root = MenuRoot::new();
    root.menu(
        "wwiv",
        "main",
        &MenuHeader::default(),
        &[item("X", r#"Pause("a", "b") junk"#)],
    );
    let mut host = ScriptedHost::new(&["X"]);
    run_main(&root, &mut host);
    assert_eq!(
        host.externals[0],
        ("Pause".to_string(), "a".to_string(), "b".to_string())
    );
    assert!(host.logged_containing("*MENU* : Invalid code, expected EOL after close parentheses"));
    assert!(host.logged_containing(r#"*MENU* : Pause("a", "b") junk"#));
}

#[test]
fn test_entry_script_can_finish_the_menu() {
    let root = MenuRoot::new();
    let header = MenuHeader {
        entry_script: "Welcome~ReturnFromMenu".to_string(),
        exit_script: "Bye".to_string(),
        ..MenuHeader::default()
    };
    root.menu("wwiv", "main", &header, &[]);
    let mut host = ScriptedHost::new(&["never"]);
    assert_eq!(run_main(&root, &mut host), Outcome::Finished);
    assert_eq!(host.external_names(), vec!["Welcome", "Bye"]);
    assert_eq!(host.reads, 0);
}

#[test]
fn test_hidden_and_denied_items_left_out_of_generated_menu() {
    let root = MenuRoot::new();
    let secret = MenuItem {
        sysop_only: true,
        menu_text: "Secret".to_string(),
        ..item("S", "Secret")
    };
    let visible = MenuItem {
        menu_text: "Visible".to_string(),
        ..item("V", "Visible")
    };
    root.menu("wwiv", "main", &MenuHeader::default(), &[secret, visible]);
    let mut host = ScriptedHost::new(&[]);
    host.principal = Principal {
        effective_sl: 255,
        dsl: 255,
        ..Principal::default()
    };
    run_main(&root, &mut host);
    assert!(host.displayed[0].contains("Visible"));
    assert!(!host.displayed[0].contains("Secret"));
}
