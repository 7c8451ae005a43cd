//! Multi-component workflow tests.

mod placement_workflow_tests;
