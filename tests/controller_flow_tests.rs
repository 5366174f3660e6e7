//! Integrationstests für den Intent-/Command-Fluss des AppControllers.

use puppet_rig_editor::import::{
    DocumentLayer, GroupInfo, LayeredDocument, LayeredDocumentDecoder, PuppetDeserializer,
    RasterLayer,
};
use puppet_rig_editor::shared::EditorResult;
use puppet_rig_editor::{
    AppCommand, AppController, AppIntent, AppState, EditMode, EditorError, EditorOptions,
    ImportBackends, Node, Part, Project, Puppet, SourceBlendMode,
};
use std::path::{Path, PathBuf};

/// Liefert immer dasselbe Dokument: versteckte Gruppe mit B, darüber A.
struct FixedDocument;

impl LayeredDocumentDecoder for FixedDocument {
    fn decode(&self, _path: &Path) -> EditorResult<LayeredDocument> {
        Ok(LayeredDocument {
            width: 64,
            height: 32,
            layers: vec![
                DocumentLayer::GroupBegin(GroupInfo {
                    name: "G".to_string(),
                    visible: false,
                    blend: SourceBlendMode::PassThrough,
                }),
                raster("B", [255, 0, 0, 255]),
                DocumentLayer::GroupEnd,
                raster("A", [0, 255, 0, 255]),
            ],
        })
    }
}

/// Dokument mit einem Gruppen-Ende ohne Anfang.
struct BrokenDocument;

impl LayeredDocumentDecoder for BrokenDocument {
    fn decode(&self, _path: &Path) -> EditorResult<LayeredDocument> {
        Ok(LayeredDocument {
            width: 8,
            height: 8,
            layers: vec![raster("A", [0, 0, 0, 255]), DocumentLayer::GroupEnd],
        })
    }
}

/// Baut eine kleine Puppet mit Gruppe, zwei Parts und einem Parameter.
struct TinyRig;

impl PuppetDeserializer for TinyRig {
    fn deserialize(&self, _path: &Path) -> EditorResult<Puppet> {
        let mut puppet = Puppet::new();
        let root = puppet.root();
        let body = puppet
            .add_child(root, Node::new("body"))
            .ok_or_else(|| EditorError::state("root fehlt"))?;
        puppet.add_child(
            body,
            Node::new_part("torso", Part::new(glam::Vec2::new(40.0, 60.0), None)),
        );
        puppet.add_child(
            root,
            Node::new_part("head", Part::new(glam::Vec2::new(20.0, 20.0), None)),
        );
        puppet.add_parameter("Head X");
        Ok(puppet)
    }
}

fn raster(name: &str, rgba: [u8; 4]) -> DocumentLayer {
    DocumentLayer::Raster(RasterLayer {
        name: name.to_string(),
        visible: true,
        opacity: 255,
        blend: SourceBlendMode::Normal,
        left: 0,
        top: 0,
        width: 2,
        height: 2,
        pixels: rgba.repeat(4),
    })
}

fn controller_with_fakes() -> AppController {
    AppController::with_backends(
        ImportBackends::default()
            .with_layered_decoder(FixedDocument)
            .with_puppet_deserializer(TinyRig),
    )
}

fn part_of<'a>(puppet: &'a Puppet, name: &str) -> &'a Part {
    puppet
        .find_by_name(name)
        .and_then(|id| puppet.node(id))
        .and_then(|n| n.as_part())
        .expect("Part sollte existieren")
}

fn import_rig(controller: &mut AppController, state: &mut AppState) {
    controller
        .handle_intent(
            state,
            AppIntent::ImportPuppetRequested {
                path: PathBuf::from("rig.inp"),
            },
        )
        .expect("Puppet-Import sollte gelingen");
}

#[test]
fn test_layered_import_flattens_groups_and_applies_visibility() {
    let mut controller = controller_with_fakes();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::ImportLayeredDocumentRequested {
                path: PathBuf::from("doc.psd"),
            },
        )
        .expect("Import sollte gelingen");

    let puppet = state.puppet().expect("Projekt sollte aktiv sein");
    let root_children = puppet
        .node(puppet.root())
        .map(|n| n.children().len())
        .unwrap_or_default();
    assert_eq!(root_children, 2);

    let a = part_of(puppet, "A");
    let b = part_of(puppet, "B");
    assert!(a.enabled);
    assert!(!b.enabled);
    assert_eq!(a.zsort, 0.0);
    approx::assert_relative_eq!(b.zsort, -0.02);
    assert_eq!(
        state.project.as_ref().and_then(|p| p.source_path.clone()),
        Some(PathBuf::from("doc.psd"))
    );
    assert!(state.status_message.is_some());
}

#[test]
fn test_failed_import_keeps_previous_project() {
    let mut controller = controller_with_fakes();
    let mut state = AppState::new();
    import_rig(&mut controller, &mut state);
    let head = state
        .puppet()
        .and_then(|p| p.find_by_name("head"))
        .expect("head sollte existieren");
    controller
        .handle_intent(&mut state, AppIntent::NodeClicked { uuid: head, additive: false })
        .expect("Selektion sollte gelingen");

    let mut broken = AppController::with_backends(
        ImportBackends::default().with_layered_decoder(BrokenDocument),
    );
    let result = broken.handle_intent(
        &mut state,
        AppIntent::ImportLayeredDocumentRequested {
            path: PathBuf::from("broken.psd"),
        },
    );

    assert!(result.is_err());
    assert!(state.puppet().is_some_and(|p| p.contains(head)));
    assert_eq!(state.selection.entries(), &[head]);
}

#[test]
fn test_import_without_registered_decoder_is_state_error() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let err = controller
        .handle_intent(
            &mut state,
            AppIntent::ImportLayeredDocumentRequested {
                path: PathBuf::from("doc.psd"),
            },
        )
        .expect_err("ohne Dekoder sollte der Import scheitern");

    assert!(matches!(
        err.downcast_ref::<EditorError>(),
        Some(EditorError::State(_))
    ));
    assert!(state.project.is_none());
}

#[test]
fn test_import_resets_session_state() {
    let mut controller = controller_with_fakes();
    let mut state = AppState::new();
    import_rig(&mut controller, &mut state);
    let param = state
        .puppet()
        .and_then(|p| p.parameters().first().map(|p| p.uuid))
        .expect("Parameter sollte existieren");

    controller
        .handle_intent(&mut state, AppIntent::SelectAllRequested)
        .expect("SelectAll");
    controller
        .handle_intent(
            &mut state,
            AppIntent::EditModeChanged {
                mode: EditMode::VertexEdit,
                unselect_first: false,
            },
        )
        .expect("Moduswechsel");
    controller
        .handle_intent(&mut state, AppIntent::ParameterArmRequested { uuid: param })
        .expect("Parameter scharf");
    assert!(state.editor.armed_parameter().is_some());

    controller
        .handle_intent(
            &mut state,
            AppIntent::ImportLayeredDocumentRequested {
                path: PathBuf::from("doc.psd"),
            },
        )
        .expect("Import sollte gelingen");

    assert!(state.selection.is_empty());
    assert_eq!(state.editor.mode, EditMode::ModelEdit);
    assert!(state.editor.drawable_cache().is_empty());
    assert!(state.editor.armed_parameter().is_none());
}

#[test]
fn test_selection_flow_with_duplicates_and_removal() {
    let mut controller = controller_with_fakes();
    let mut state = AppState::new();
    import_rig(&mut controller, &mut state);
    let (head, torso) = {
        let puppet = state.puppet().expect("Projekt");
        (
            puppet.find_by_name("head").expect("head"),
            puppet.find_by_name("torso").expect("torso"),
        )
    };

    for (uuid, additive) in [(head, false), (torso, true), (head, true)] {
        controller
            .handle_intent(&mut state, AppIntent::NodeClicked { uuid, additive })
            .expect("Klick sollte gelingen");
    }
    assert_eq!(state.selection.entries(), &[head, torso, head]);

    controller
        .handle_intent(&mut state, AppIntent::NodeDeselectRequested { uuid: head })
        .expect("Abwählen sollte gelingen");
    assert_eq!(state.selection.entries(), &[torso]);

    controller
        .handle_intent(
            &mut state,
            AppIntent::NodeClicked {
                uuid: u32::MAX,
                additive: true,
            },
        )
        .expect("Unbekannter Node ist kein Fehler");
    assert_eq!(state.selection.entries(), &[torso]);

    controller
        .handle_intent(&mut state, AppIntent::SelectNoneRequested)
        .expect("SelectNone");
    assert!(state.selection.is_empty());
}

#[test]
fn test_select_all_excludes_root_in_preorder() {
    let mut controller = controller_with_fakes();
    let mut state = AppState::new();
    import_rig(&mut controller, &mut state);

    controller
        .handle_intent(&mut state, AppIntent::SelectAllRequested)
        .expect("SelectAll");

    let puppet = state.puppet().expect("Projekt");
    let names: Vec<&str> = state
        .selection
        .entries()
        .iter()
        .filter_map(|id| puppet.node(*id))
        .map(|n| n.name.as_str())
        .collect();
    assert_eq!(names, vec!["body", "torso", "head"]);
}

#[test]
fn test_edit_mode_caches_drawables_and_clears_selection_on_request() {
    let mut controller = controller_with_fakes();
    let mut state = AppState::new();
    import_rig(&mut controller, &mut state);
    controller
        .handle_intent(&mut state, AppIntent::SelectAllRequested)
        .expect("SelectAll");

    controller
        .handle_intent(
            &mut state,
            AppIntent::EditModeChanged {
                mode: EditMode::AnimEdit,
                unselect_first: true,
            },
        )
        .expect("Moduswechsel");

    assert!(state.selection.is_empty());
    assert_eq!(state.editor.drawable_cache().len(), 2);

    controller
        .handle_intent(
            &mut state,
            AppIntent::EditModeChanged {
                mode: EditMode::ModelEdit,
                unselect_first: false,
            },
        )
        .expect("Moduswechsel");
    assert!(state.editor.drawable_cache().is_empty());
}

#[test]
fn test_focus_selection_targets_selected_drawable() {
    let mut controller = controller_with_fakes();
    let mut state = AppState::new();
    controller
        .handle_intent(&mut state, AppIntent::ViewportResized { size: [800.0, 600.0] })
        .expect("Resize");
    import_rig(&mut controller, &mut state);
    let head = state
        .puppet()
        .and_then(|p| p.find_by_name("head"))
        .expect("head");

    controller
        .handle_intent(&mut state, AppIntent::NodeClicked { uuid: head, additive: false })
        .expect("Klick");
    controller
        .handle_intent(&mut state, AppIntent::FocusSelectionRequested)
        .expect("Fokus");

    let camera = &state.view.camera;
    assert!(camera.target_zoom.is_finite());
    let options = EditorOptions::default();
    assert!(camera.target_zoom >= options.camera_zoom_min);
    assert!(camera.target_zoom <= options.camera_zoom_max);
    assert_eq!(camera.target_position, glam::Vec2::ZERO);

    let mut steps = 0;
    while steps < 500 {
        controller
            .handle_intent(&mut state, AppIntent::FrameTick)
            .expect("Tick");
        steps += 1;
    }
    approx::assert_relative_eq!(
        state.view.camera.zoom,
        state.view.camera.target_zoom,
        epsilon = 1e-3
    );
}

#[test]
fn test_focus_without_project_is_noop() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let before = state.view.camera.clone();

    controller
        .handle_intent(&mut state, AppIntent::FocusSelectionRequested)
        .expect("Fokus ohne Projekt ist kein Fehler");
    controller
        .handle_intent(
            &mut state,
            AppIntent::FocusNodeRequested {
                uuid: Some(42),
                position: None,
            },
        )
        .expect("Fokus auf unbekannten Node ist kein Fehler");

    assert_eq!(state.view.camera, before);
}

#[test]
fn test_rebleed_requires_project_and_reports_progress() {
    let mut controller = controller_with_fakes();
    let mut state = AppState::new();

    let err = controller
        .handle_intent(&mut state, AppIntent::RebleedRequested)
        .expect_err("Rebleed ohne Projekt sollte scheitern");
    assert!(matches!(
        err.downcast_ref::<EditorError>(),
        Some(EditorError::State(_))
    ));

    controller
        .handle_intent(
            &mut state,
            AppIntent::ImportLayeredDocumentRequested {
                path: PathBuf::from("doc.psd"),
            },
        )
        .expect("Import sollte gelingen");
    controller
        .handle_intent(&mut state, AppIntent::RebleedRequested)
        .expect("Rebleed sollte gelingen");

    assert_eq!(state.tasks.progress(), 1.0);
    assert!(state
        .tasks
        .progress_log()
        .windows(2)
        .all(|w| w[0] <= w[1]));
}

#[test]
fn test_new_project_replaces_active_puppet() {
    let mut controller = controller_with_fakes();
    let mut state = AppState::new();
    import_rig(&mut controller, &mut state);

    controller
        .handle_intent(&mut state, AppIntent::NewProjectRequested)
        .expect("Neues Projekt");

    assert_eq!(state.node_count(), 1);
    assert!(state
        .project
        .as_ref()
        .is_some_and(|p| p.source_path.is_none()));
}

#[test]
fn test_options_change_is_applied_and_logged() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let options = EditorOptions {
        zsort_step: 0.5,
        ..EditorOptions::default()
    };

    controller
        .handle_intent(
            &mut state,
            AppIntent::OptionsChanged {
                options: Box::new(options.clone()),
            },
        )
        .expect("Optionen");

    assert_eq!(state.options, options);
    assert!(matches!(
        state.command_log.entries().last(),
        Some(AppCommand::ApplyOptions { .. })
    ));
}

#[test]
fn test_direct_commands_bypass_intent_mapping() {
    let mut controller = controller_with_fakes();
    let mut state = AppState::new();
    state.project = Some(Project::from_puppet(Puppet::new(), None));

    controller
        .handle_command(&mut state, AppCommand::ZoomCamera { factor: 100.0 })
        .expect("Zoom");
    controller
        .handle_command(&mut state, AppCommand::ResetCamera)
        .expect("Reset");

    assert_eq!(state.view.camera.zoom, 1.0);
    assert_eq!(state.command_log.len(), 2);
}
